//! # Blueprint Document
//!
//! The render-agnostic output of a conversion: a fixed-size canvas and flat,
//! per-kind lists of positioned primitives. A list is only written out when it
//! holds at least one component.

mod blueprint;
mod border;
mod components;
mod number;
mod serializer;

pub use blueprint::{Blueprint, DEFAULT_BACKGROUND_COLOR};
pub use border::BorderAttributes;
pub use components::{BlockComponent, ImageComponent, LineComponent, QrcodeComponent, TextComponent};
pub use serializer::{to_json, SerializeError};
