use crate::pass_through::PassThroughAttributes;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presentation variant of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Track only; the input is hidden and has no grid column.
    Basic,
    /// Numeric text input next to the track.
    Edit,
    /// Hidden input plus a badge that mirrors the value.
    Badge,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Edit => "edit",
            Self::Badge => "badge",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "basic" => Ok(Self::Basic),
            "edit" => Ok(Self::Edit),
            "badge" => Ok(Self::Badge),
            other => Err(Error::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout axis of a slider.
///
/// Parsing follows the component attribute convention: any value starting with `vertical` is a
/// vertical layout, and a vertical value ending in `bottom` puts the label below the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
    VerticalBottom,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::VerticalBottom => "vertical-bottom",
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::VerticalBottom)
    }

    /// True when the label row goes last and the track row comes before the input row.
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::VerticalBottom)
    }

    /// The orientation as understood by the client widget, which has no notion of label
    /// placement.
    pub fn widget_name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical | Self::VerticalBottom => "vertical",
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("vertical") {
            if s.ends_with("bottom") {
                return Ok(Self::VerticalBottom);
            }
            return Ok(Self::Vertical);
        }
        if s == "horizontal" {
            return Ok(Self::Horizontal);
        }
        Err(Error::InvalidOrientation {
            value: s.to_string(),
        })
    }
}

impl TryFrom<String> for Orientation {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Orientation> for &'static str {
    fn from(value: Orientation) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_max() -> i64 {
    100
}

fn default_step() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

/// The slider component state as owned by the surrounding component tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderState {
    #[serde(default)]
    pub value: Option<i64>,
    /// Raw request value stored by decode; takes precedence over `value` when rendering.
    #[serde(default)]
    pub submitted_value: Option<String>,
    #[serde(default)]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_true")]
    pub valid: bool,
    #[serde(default = "default_true")]
    pub rendered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_delay_show: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_delay_hide: Option<u32>,
    /// Pass-through attributes, or `None` when the host has no pass-through support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_through: Option<IndexMap<String, String>>,
}

impl SliderState {
    pub fn new(mode: Mode) -> Self {
        Self {
            value: None,
            submitted_value: None,
            min: 0,
            max: default_max(),
            step: default_step(),
            mode,
            orientation: None,
            label: None,
            disabled: false,
            readonly: false,
            required: false,
            valid: true,
            rendered: true,
            style_class: None,
            style: None,
            handle_size: None,
            handle_shape: None,
            tooltip: None,
            tooltip_position: None,
            tooltip_container: None,
            tooltip_delay_show: None,
            tooltip_delay_hide: None,
            pass_through: None,
        }
    }

    /// The orientation used for layout; unset means horizontal.
    pub fn effective_orientation(&self) -> Orientation {
        self.orientation.unwrap_or_default()
    }

    /// Disabled and read-only sliders never accept request input.
    pub fn ignores_input(&self) -> bool {
        self.disabled || self.readonly
    }

    pub fn has_round_handle(&self) -> bool {
        self.handle_shape.as_deref() == Some("round")
    }
}

impl PassThroughAttributes for SliderState {
    fn pass_through_attributes(&self) -> Option<&IndexMap<String, String>> {
        self.pass_through.as_ref()
    }

    fn pass_through_attributes_mut(&mut self) -> Option<&mut IndexMap<String, String>> {
        self.pass_through.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn orientation_uses_prefix_and_suffix_rules() {
        assert_eq!(
            "horizontal".parse::<Orientation>(),
            Ok(Orientation::Horizontal)
        );
        assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert_eq!(
            "vertical-bottom".parse::<Orientation>(),
            Ok(Orientation::VerticalBottom)
        );
        assert_eq!(
            "verticalbottom".parse::<Orientation>(),
            Ok(Orientation::VerticalBottom)
        );
        assert_eq!(
            "vertical-top".parse::<Orientation>(),
            Ok(Orientation::Vertical)
        );
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(Error::InvalidOrientation { .. })
        ));
    }

    #[test]
    fn widget_name_drops_label_placement() {
        assert_eq!(Orientation::VerticalBottom.widget_name(), "vertical");
        assert_eq!(Orientation::Vertical.widget_name(), "vertical");
        assert_eq!(Orientation::Horizontal.widget_name(), "horizontal");
    }

    #[test]
    fn mode_rejects_unknown_values() {
        assert_eq!("edit".parse::<Mode>(), Ok(Mode::Edit));
        assert_eq!(
            "slider".parse::<Mode>(),
            Err(Error::InvalidMode {
                value: "slider".to_string()
            })
        );
    }

    #[test]
    fn state_deserializes_with_defaults() {
        let state: SliderState = serde_json::from_value(json!({
            "mode": "badge",
            "orientation": "vertical-bottom",
            "handleShape": "round",
            "passThrough": { "type": "number", "data-x": "1" }
        }))
        .expect("valid state");

        assert_eq!(state.mode, Mode::Badge);
        assert_eq!(state.min, 0);
        assert_eq!(state.max, 100);
        assert_eq!(state.step, 1);
        assert!(state.valid);
        assert!(state.rendered);
        assert_eq!(state.value, None);
        assert_eq!(state.orientation, Some(Orientation::VerticalBottom));
        assert!(state.has_round_handle());
        let pass_through = state.pass_through.as_ref().expect("pass-through map");
        assert_eq!(
            pass_through.keys().collect::<Vec<_>>(),
            vec!["type", "data-x"]
        );
    }

    #[test]
    fn state_requires_mode() {
        let err = serde_json::from_value::<SliderState>(json!({ "max": 10 }));
        assert!(err.is_err());
    }

    #[test]
    fn orientation_serializes_as_attribute_text() {
        let mut state = SliderState::new(Mode::Basic);
        state.orientation = Some(Orientation::VerticalBottom);
        let value = serde_json::to_value(&state).expect("serializable");
        assert_eq!(value["orientation"], json!("vertical-bottom"));
        assert_eq!(value["mode"], json!("basic"));
    }
}
