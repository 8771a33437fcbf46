use crate::state::SliderState;
use serde_json::{Map, Value};

/// Key-ordered option object for the client-side slider widget.
///
/// Keys appear in a fixed order: `value`, `disabled`, `max`, `min`, `orientation`, `step`,
/// `range`. Optional keys are left out entirely rather than emitted as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig(Map<String, Value>);

impl WidgetConfig {
    /// Builds the option object for `state` showing `value`.
    pub fn from_state(state: &SliderState, value: i64) -> Self {
        let mut map = Map::new();
        map.insert("value".to_string(), Value::from(value));
        if state.ignores_input() {
            map.insert("disabled".to_string(), Value::Bool(true));
        }
        if state.max > 0 {
            map.insert("max".to_string(), Value::from(state.max));
        }
        map.insert("min".to_string(), Value::from(state.min));
        if let Some(orientation) = state.orientation {
            map.insert(
                "orientation".to_string(),
                Value::from(orientation.widget_name()),
            );
        }
        if state.step > 0 {
            map.insert("step".to_string(), Value::from(state.step));
        }
        map.insert("range".to_string(), Value::from("min"));
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serializes the options as a JSON object, which is also a JavaScript object literal.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

/// Everything the client-side widget emitter needs besides the element id.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetInit {
    pub config: WidgetConfig,
    pub badge: bool,
    pub handle_size: Option<String>,
    pub round_handle: bool,
}

impl WidgetInit {
    pub fn from_state(state: &SliderState, value: i64) -> Self {
        Self {
            config: WidgetConfig::from_state(state, value),
            badge: state.mode == crate::Mode::Badge,
            handle_size: state.handle_size.clone(),
            round_handle: state.has_round_handle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Mode, Orientation};
    use serde_json::json;

    #[test]
    fn default_slider_config() {
        let state = SliderState::new(Mode::Basic);
        let config = WidgetConfig::from_state(&state, 50);
        assert_eq!(
            config.to_json(),
            r#"{"value":50,"max":100,"min":0,"step":1,"range":"min"}"#
        );
    }

    #[test]
    fn optional_keys_follow_predicates() {
        let mut state = SliderState::new(Mode::Basic);
        state.max = 0;
        state.min = -10;
        state.step = 0;
        state.readonly = true;
        state.orientation = Some(Orientation::VerticalBottom);

        let config = WidgetConfig::from_state(&state, -5);
        assert_eq!(
            config.keys().collect::<Vec<_>>(),
            vec!["value", "disabled", "min", "orientation", "range"]
        );
        assert_eq!(config.get("disabled"), Some(&json!(true)));
        assert_eq!(config.get("orientation"), Some(&json!("vertical")));
        assert_eq!(config.get("max"), None);
        assert_eq!(config.get("step"), None);
    }

    #[test]
    fn init_carries_handle_options_and_badge_flag() {
        let mut state = SliderState::new(Mode::Badge);
        state.handle_size = Some("lg".to_string());
        state.handle_shape = Some("round".to_string());

        let init = WidgetInit::from_state(&state, 7);
        assert!(init.badge);
        assert!(init.round_handle);
        assert_eq!(init.handle_size.as_deref(), Some("lg"));
        assert_eq!(init.config.get("value"), Some(&json!(7)));
    }
}
