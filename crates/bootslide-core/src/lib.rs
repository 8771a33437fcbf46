#![forbid(unsafe_code)]

//! Slider component state, request decoding and value resolution (headless).
//!
//! This crate holds everything about a slider that does not produce markup:
//! - the component state model ([`SliderState`], [`Mode`], [`Orientation`])
//! - request decoding ([`decode()`], [`FormData`])
//! - value resolution with silent clamping ([`resolve_value`])
//! - the client widget option object ([`WidgetConfig`])

pub mod decode;
pub mod error;
pub mod form;
pub mod pass_through;
pub mod state;
pub mod value;
pub mod widget;

pub use decode::decode;
pub use error::{Error, Result};
pub use form::FormData;
pub use pass_through::{PassThroughAttributes, is_valid_attribute_name, remove_type_override};
pub use state::{Mode, Orientation, SliderState};
pub use value::{ResolvedValue, clamp_value, default_value, resolve_value, to_int};
pub use widget::{WidgetConfig, WidgetInit};
