use crate::js;
use crate::writer::HtmlWriter;
use bootslide_core::SliderState;

/// Tooltip collaborator.
///
/// `attributes` runs while the slider's outer element start tag is open; `activate` runs after
/// the slider markup is complete.
pub trait TooltipActivator {
    fn attributes(&self, out: &mut HtmlWriter, state: &SliderState);

    fn activate(&self, out: &mut HtmlWriter, state: &SliderState, client_id: &str);
}

/// Bootstrap tooltips (`data-toggle="tooltip"`), activated by an inline script.
#[derive(Debug, Clone)]
pub struct BootstrapTooltip {
    pub default_placement: String,
}

impl Default for BootstrapTooltip {
    fn default() -> Self {
        Self {
            default_placement: "bottom".to_string(),
        }
    }
}

impl TooltipActivator for BootstrapTooltip {
    fn attributes(&self, out: &mut HtmlWriter, state: &SliderState) {
        let Some(title) = state.tooltip.as_deref() else {
            return;
        };
        out.attr("data-toggle", "tooltip");
        out.attr(
            "data-placement",
            state
                .tooltip_position
                .as_deref()
                .unwrap_or(self.default_placement.as_str()),
        );
        if let Some(container) = state.tooltip_container.as_deref() {
            out.attr("data-container", container);
        }
        if state.tooltip_delay_show.is_some() || state.tooltip_delay_hide.is_some() {
            let delay = serde_json::json!({
                "show": state.tooltip_delay_show.unwrap_or(0),
                "hide": state.tooltip_delay_hide.unwrap_or(0),
            });
            out.attr("data-delay", delay);
        }
        out.attr("title", title);
    }

    fn activate(&self, out: &mut HtmlWriter, state: &SliderState, client_id: &str) {
        if state.tooltip.is_none() {
            return;
        }
        let body = format!(
            "$(function(){{$({}).tooltip();}});",
            js::id_selector(client_id)
        );
        out.element("script", |w| w.raw(&js::guard_script_body(&body)));
    }
}
