#![forbid(unsafe_code)]

//! Markup and widget-script rendering for slider components.
//!
//! The renderer only assembles markup. Grid columns, badges, tooltips, validation styling and
//! the client widget script are collaborators behind traits; [`RenderOptions::default`] wires
//! in Bootstrap 3 / jQuery UI flavored implementations.

pub mod badge;
pub mod grid;
pub mod js;
pub mod script;
pub mod slider;
pub mod tooltip;
pub mod validation;
pub mod writer;

use crate::badge::{BadgeRenderer, BootstrapBadge};
use crate::grid::{BootstrapGrid, GridLayout};
use crate::script::{JQueryUiSlider, WidgetScriptEmitter};
use crate::tooltip::{BootstrapTooltip, TooltipActivator};
use crate::validation::{MessageSeverities, ValidationStyle};
use bootslide_core::SliderState;
use std::sync::Arc;

pub use slider::SliderRenderer;
pub use writer::HtmlWriter;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] bootslide_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The collaborators a [`SliderRenderer`] delegates to.
#[derive(Clone)]
pub struct RenderOptions {
    pub grid: Arc<dyn GridLayout + Send + Sync>,
    pub badge: Arc<dyn BadgeRenderer + Send + Sync>,
    pub tooltip: Arc<dyn TooltipActivator + Send + Sync>,
    pub script: Arc<dyn WidgetScriptEmitter + Send + Sync>,
    pub validation: Arc<dyn ValidationStyle + Send + Sync>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grid: Arc::new(BootstrapGrid),
            badge: Arc::new(BootstrapBadge),
            tooltip: Arc::new(BootstrapTooltip::default()),
            script: Arc::new(JQueryUiSlider),
            validation: Arc::new(MessageSeverities::default()),
        }
    }
}

impl RenderOptions {
    /// Default collaborators with validation styling taken from `messages`.
    pub fn with_messages(messages: MessageSeverities) -> Self {
        Self {
            validation: Arc::new(messages),
            ..Self::default()
        }
    }
}

/// Renders one slider with `options`, persisting its default value into `state`.
pub fn render_slider(
    state: &mut SliderState,
    client_id: &str,
    options: &RenderOptions,
) -> Result<String> {
    SliderRenderer::new(options.clone()).encode_to_string(state, client_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<RenderOptions>();
        require_sync::<RenderOptions>();
        require_send::<SliderRenderer>();
        require_sync::<SliderRenderer>();
        require_send::<HtmlWriter>();
        require_sync::<HtmlWriter>();
        require_send::<Error>();
        require_sync::<Error>();
    }
}
