#![forbid(unsafe_code)]

//! `bootslide` renders slider form controls on the server and decodes their submissions.
//!
//! # Features
//!
//! - `render` (default): enable markup + widget script rendering (`bootslide::render`)

pub use bootslide_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use bootslide_render::badge::{BadgeRenderer, BadgeSpec, BootstrapBadge};
    pub use bootslide_render::grid::{BootstrapGrid, ColumnSpec, GridLayout};
    pub use bootslide_render::script::{JQueryUiSlider, WidgetScriptEmitter};
    pub use bootslide_render::tooltip::{BootstrapTooltip, TooltipActivator};
    pub use bootslide_render::validation::{MessageSeverities, Severity, ValidationStyle};
    pub use bootslide_render::{Error, HtmlWriter, RenderOptions, SliderRenderer, render_slider};

    use bootslide_core::{FormData, SliderState};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] bootslide_core::Error),
        #[error(transparent)]
        Render(#[from] bootslide_render::Error),
        #[error("slider state JSON error: {0}")]
        Json(#[from] serde_json::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string (for example a file stem) into a client id usable as an
    /// element id and form field name.
    ///
    /// `:` naming-container separators are kept; inside each segment, runs of characters other
    /// than ASCII alphanumerics and `_` collapse into a single `-`. Empty segments are dropped,
    /// and an id that doesn't start with a letter gets an `s-` prefix.
    pub fn sanitize_client_id(raw: &str) -> String {
        let segments: Vec<String> = raw
            .split(':')
            .map(sanitize_segment)
            .filter(|segment| !segment.is_empty())
            .collect();
        let mut id = segments.join(":");
        if id.is_empty() {
            return "slider".to_string();
        }
        if !id.starts_with(|c: char| c.is_ascii_alphabetic()) {
            id.insert_str(0, "s-");
        }
        id
    }

    fn sanitize_segment(segment: &str) -> String {
        let mut out = String::with_capacity(segment.len());
        for ch in segment.trim().chars() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                out.push(ch);
            } else if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }
        out.truncate(out.trim_end_matches('-').len());
        out
    }

    /// Parses a slider state from its JSON configuration.
    pub fn parse_state(json: &str) -> Result<SliderState> {
        Ok(serde_json::from_str(json)?)
    }

    /// Runs one request cycle: decode `form` into `state`, then render it.
    pub fn process_request(
        state: &mut SliderState,
        client_id: &str,
        form: &FormData,
        options: &RenderOptions,
    ) -> Result<String> {
        let renderer = SliderRenderer::new(options.clone());
        renderer.decode(state, client_id, form);
        Ok(renderer.encode_to_string(state, client_id)?)
    }

    /// Synchronous render helper: parse the JSON state, render it, and return the markup
    /// together with the state as updated by rendering.
    pub fn render_state_json(
        json: &str,
        client_id: &str,
        options: &RenderOptions,
    ) -> Result<(String, SliderState)> {
        let mut state = parse_state(json)?;
        let html = render_slider(&mut state, client_id, options)?;
        Ok((html, state))
    }

}
