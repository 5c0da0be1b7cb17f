//! # Blueprint Converter
//!
//! Turns one selected node of a design surface into a [`Blueprint`]: a flat
//! list of texts, blocks, images and lines with pixel positions relative to
//! the selection's top-left corner.
//!
//! ## Pipeline
//!
//! 1. The selection is walked depth-first with an explicit stack, so nesting
//!    depth never touches the call stack. Every visited node, exported or not,
//!    consumes one visitation index.
//! 2. Each supported leaf is handed to its parser (`parsers::*`), which
//!    resolves paints and borders and returns `None` when the node has nothing
//!    to export.
//! 3. Once the walk ends, visitation indices are shifted so the last visited
//!    node sits at zIndex 0.
//!
//! ## Partial Export
//!
//! Only a hidden root or a root that renders nothing stops a conversion. A
//! hidden child, an unresolvable paint or an unsupported node kind simply
//! contributes nothing, and its siblings are still exported.
//!
//! ## Determinism
//!
//! Conversion is a pure function of the snapshot and the options: the same
//! input always serializes to the same bytes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blueprint_converter::{convert_to_json, ConvertOptions};
//! use blueprint_scene::Snapshot;
//!
//! let snapshot = Snapshot::load(path)?;
//! let json = convert_to_json(snapshot.single()?, &ConvertOptions::default())?;
//! ```

mod border;
mod converter;
mod error;
mod geometry;
mod options;
mod order;
mod paint;
pub mod parsers;


pub use border::resolve_border;
pub use converter::{convert, convert_or_empty, convert_to_json, Converter};
pub use error::{ConvertError, ConvertResult};
pub use geometry::{round_half_up, Origin};
pub use options::ConvertOptions;
pub use order::{normalize_z_indices, VisitOrder};
pub use paint::{first_visible, paint_to_hex, resolve_paints, rgb_to_hex};

pub use blueprint_document::Blueprint;
