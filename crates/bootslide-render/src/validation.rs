use bootslide_core::SliderState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Looks up the validation styling class for a component.
pub trait ValidationStyle {
    /// Space separated CSS classes, or an empty string.
    fn error_and_required_class(&self, state: &SliderState, client_id: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

/// Highest message severity per client id, as collected by the validation phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSeverities {
    severities: IndexMap<String, Severity>,
}

impl MessageSeverities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message; only the most severe message per client id is kept.
    pub fn add(&mut self, client_id: impl Into<String>, severity: Severity) {
        let slot = self.severities.entry(client_id.into()).or_insert(severity);
        if severity > *slot {
            *slot = severity;
        }
    }

    pub fn get(&self, client_id: &str) -> Option<Severity> {
        self.severities.get(client_id).copied()
    }
}

impl ValidationStyle for MessageSeverities {
    fn error_and_required_class(&self, state: &SliderState, client_id: &str) -> String {
        let mut classes: Vec<&str> = Vec::new();
        let severity = self.get(client_id);
        if !state.valid || matches!(severity, Some(Severity::Error | Severity::Fatal)) {
            classes.push("has-error");
        } else if severity == Some(Severity::Warning) {
            classes.push("has-warning");
        }
        if state.required {
            classes.push("bf-required");
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootslide_core::Mode;

    #[test]
    fn most_severe_message_wins() {
        let mut messages = MessageSeverities::new();
        messages.add("s", Severity::Warning);
        messages.add("s", Severity::Error);
        messages.add("s", Severity::Info);
        assert_eq!(messages.get("s"), Some(Severity::Error));
    }

    #[test]
    fn classes_from_messages_and_flags() {
        let mut messages = MessageSeverities::new();
        messages.add("warned", Severity::Warning);
        let mut state = SliderState::new(Mode::Basic);

        assert_eq!(messages.error_and_required_class(&state, "s"), "");
        assert_eq!(
            messages.error_and_required_class(&state, "warned"),
            "has-warning"
        );

        state.required = true;
        state.valid = false;
        assert_eq!(
            messages.error_and_required_class(&state, "warned"),
            "has-error bf-required"
        );
    }
}
