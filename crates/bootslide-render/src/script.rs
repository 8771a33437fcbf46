use crate::js;
use crate::writer::HtmlWriter;
use bootslide_core::WidgetInit;
use std::fmt::Write as _;

/// Client widget initialization collaborator.
pub trait WidgetScriptEmitter {
    /// Emits whatever attaches the client widget to `<div id="{client_id}_slider">`.
    fn emit(&self, out: &mut HtmlWriter, client_id: &str, init: &WidgetInit);
}

/// Initializes a jQuery UI slider and keeps the input (and badge) in sync while sliding.
#[derive(Debug, Clone, Copy, Default)]
pub struct JQueryUiSlider;

impl JQueryUiSlider {
    pub fn script_body(client_id: &str, init: &WidgetInit) -> String {
        let mut body = String::new();
        let _ = write!(
            &mut body,
            "$(function(){{var slider=$({});",
            js::id_selector(&format!("{client_id}_slider"))
        );
        let _ = write!(
            &mut body,
            "slider.slider($.extend({},{{slide:function(event,ui){{$({}).val(ui.value);",
            init.config.to_json(),
            js::input_name_selector(client_id)
        );
        if init.badge {
            let _ = write!(
                &mut body,
                "$({}).text(ui.value);",
                js::id_selector(&format!("{client_id}_badge"))
            );
        }
        body.push_str("}}));");

        let mut handle_classes = Vec::new();
        if let Some(size) = init.handle_size.as_deref().filter(|s| !s.is_empty()) {
            handle_classes.push(format!("ui-slider-handle-{size}"));
        }
        if init.round_handle {
            handle_classes.push("ui-slider-handle-round".to_string());
        }
        if !handle_classes.is_empty() {
            let _ = write!(
                &mut body,
                "slider.find(\".ui-slider-handle\").addClass({});",
                js::string_literal(&handle_classes.join(" "))
            );
        }
        body.push_str("});");
        body
    }
}

impl WidgetScriptEmitter for JQueryUiSlider {
    fn emit(&self, out: &mut HtmlWriter, client_id: &str, init: &WidgetInit) {
        let body = Self::script_body(client_id, init);
        out.element("script", |w| w.raw(&js::guard_script_body(&body)));
    }
}
