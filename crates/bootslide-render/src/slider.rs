use crate::badge::BadgeSpec;
use crate::grid::ColumnSpec;
use crate::writer::HtmlWriter;
use crate::{RenderOptions, Result};
use bootslide_core::{
    FormData, Mode, PassThroughAttributes, SliderState, WidgetInit, is_valid_attribute_name,
    remove_type_override, resolve_value,
};

/// Attributes the renderer writes on the input itself; pass-through entries never repeat them,
/// compared without regard to ASCII case.
const INPUT_ATTRIBUTES: &[&str] = &[
    "name",
    "type",
    "size",
    "min",
    "max",
    "maxlength",
    "disabled",
    "readonly",
    "class",
    "value",
];

/// Renders `<b:slider>`-style components and decodes their submissions.
#[derive(Clone, Default)]
pub struct SliderRenderer {
    options: RenderOptions,
}

/// Per-encode values shared by the markup helpers.
struct Frame<'a> {
    state: &'a SliderState,
    client_id: &'a str,
    value: i64,
    vertical: bool,
    row_class: String,
}

impl SliderRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Stores the request value for `client_id` as the submitted value.
    pub fn decode(&self, state: &mut SliderState, client_id: &str, form: &FormData) -> bool {
        bootslide_core::decode(state, client_id, form)
    }

    /// Writes the slider markup followed by its widget and tooltip scripts.
    ///
    /// Persists the default value into `state` when none was stored, and drops any
    /// pass-through `type` attribute before the input is written. A slider that is not
    /// rendered produces no output and is left untouched.
    pub fn encode(
        &self,
        state: &mut SliderState,
        client_id: &str,
        out: &mut HtmlWriter,
    ) -> Result<()> {
        if !state.rendered {
            tracing::trace!(client_id, "slider not rendered");
            return Ok(());
        }

        let resolved = resolve_value(state)?;
        tracing::trace!(client_id, value = resolved.display, "encoding slider");
        resolved.apply(state);
        remove_type_override(state);

        let state: &SliderState = state;
        let orientation = state.effective_orientation();
        let styling = self
            .options
            .validation
            .error_and_required_class(state, client_id);
        let frame = Frame {
            state,
            client_id,
            value: resolved.display,
            vertical: orientation.is_vertical(),
            row_class: if styling.is_empty() {
                "row".to_string()
            } else {
                format!("row {styling}")
            },
        };

        out.element("div", |w| {
            w.attr("id", client_id);
            self.options.tooltip.attributes(w, state);
            w.attr("class", "form-group");
            w.element("div", |w| {
                w.attr(
                    "class",
                    if frame.vertical {
                        "row slider-vertical"
                    } else {
                        "row slider"
                    },
                );
                if frame.vertical {
                    self.encode_vertical(w, &frame, orientation.is_bottom());
                } else {
                    self.encode_horizontal(w, &frame);
                }
            });
        });

        let init = WidgetInit::from_state(state, resolved.display);
        self.options.script.emit(out, client_id, &init);
        self.options.tooltip.activate(out, state, client_id);
        Ok(())
    }

    /// Convenience wrapper around [`Self::encode`] returning the markup as a string.
    pub fn encode_to_string(&self, state: &mut SliderState, client_id: &str) -> Result<String> {
        let mut out = HtmlWriter::new();
        self.encode(state, client_id, &mut out)?;
        Ok(out.into_string())
    }

    fn encode_horizontal(&self, w: &mut HtmlWriter, frame: &Frame<'_>) {
        if let Some(label) = frame.state.label.as_deref() {
            w.element("div", |w| {
                w.attr("class", &frame.row_class);
                self.options
                    .grid
                    .column(w, &ColumnSpec::uniform(6), &mut |w| {
                        w.element("label", |w| {
                            w.attr("for", frame.client_id);
                            w.text(label);
                        });
                    });
            });
        }
        w.element("div", |w| {
            w.attr("class", "row");
            self.encode_input(w, frame);
            self.encode_track(w, frame);
        });
    }

    fn encode_vertical(&self, w: &mut HtmlWriter, frame: &Frame<'_>, bottom: bool) {
        if !bottom {
            self.encode_vertical_label(w, frame);
        }

        if bottom {
            w.element("div", |w| {
                w.attr("class", "row");
                self.encode_track(w, frame);
            });
            w.element("div", |w| {
                w.attr("class", "row");
                self.encode_input(w, frame);
            });
        } else {
            w.element("div", |w| {
                w.attr("class", "row");
                self.encode_input(w, frame);
            });
            w.element("div", |w| {
                w.attr("class", &frame.row_class);
                self.encode_track(w, frame);
            });
        }

        if bottom {
            self.encode_vertical_label(w, frame);
        }
    }

    fn encode_vertical_label(&self, w: &mut HtmlWriter, frame: &Frame<'_>) {
        let Some(label) = frame.state.label.as_deref() else {
            return;
        };
        w.element("div", |w| {
            w.attr("class", &frame.row_class);
            self.options
                .grid
                .column(w, &ColumnSpec::uniform(12), &mut |w| {
                    w.element("p", |w| w.text(label));
                });
        });
    }

    fn encode_input(&self, w: &mut HtmlWriter, frame: &Frame<'_>) {
        let mode = frame.state.mode;
        if mode == Mode::Basic {
            self.write_input(w, frame);
            return;
        }

        let cols = if frame.vertical { 12 } else { 1 };
        self.options
            .grid
            .column(w, &ColumnSpec::uniform(cols), &mut |w| {
                if mode == Mode::Badge {
                    let id = format!("{}_badge", frame.client_id);
                    let value = frame.value.to_string();
                    self.options.badge.badge(
                        w,
                        &BadgeSpec {
                            id: &id,
                            value: &value,
                            style_class: frame.state.style_class.as_deref(),
                            style: frame.state.style.as_deref(),
                        },
                    );
                }
                self.write_input(w, frame);
            });
    }

    fn write_input(&self, w: &mut HtmlWriter, frame: &Frame<'_>) {
        let state = frame.state;
        // `size` stays one shorter than `maxlength`, as the component has always rendered it.
        let max_len = state.max.to_string().len();

        w.void_element("input", |w| {
            w.attr("name", frame.client_id);
            w.attr(
                "type",
                if state.mode == Mode::Edit {
                    "text"
                } else {
                    "hidden"
                },
            );
            w.attr("size", max_len - 1);
            w.attr("min", state.min);
            w.attr("max", state.max);
            w.attr("maxlength", max_len);
            if state.disabled {
                w.attr("disabled", "disabled");
            }
            if state.readonly {
                w.attr("readonly", "readonly");
            }
            w.attr(
                "class",
                if frame.vertical {
                    "form-control input-sm text-center"
                } else {
                    "form-control input-sm"
                },
            );
            w.attr("value", frame.value);

            if let Some(attributes) = state.pass_through_attributes() {
                let mut written: Vec<&str> = Vec::with_capacity(attributes.len());
                for (name, value) in attributes {
                    let taken = |known: &&str| known.eq_ignore_ascii_case(name);
                    let skip = if INPUT_ATTRIBUTES.iter().any(taken) || written.iter().any(taken) {
                        Some("already written")
                    } else if !is_valid_attribute_name(name) {
                        Some("invalid name")
                    } else {
                        None
                    };
                    if let Some(reason) = skip {
                        tracing::debug!(
                            client_id = frame.client_id,
                            name = %name,
                            reason,
                            "skipped pass-through attribute"
                        );
                        continue;
                    }
                    w.attr(name, value);
                    written.push(name);
                }
            }
        });
    }

    fn encode_track(&self, w: &mut HtmlWriter, frame: &Frame<'_>) {
        let cols = if frame.vertical { 12 } else { 4 };
        self.options
            .grid
            .column(w, &ColumnSpec::uniform(cols), &mut |w| {
                w.element("div", |w| {
                    w.attr("id", format_args!("{}_slider", frame.client_id));
                });
            });
    }
}
