//! One parser per exported node kind.
//!
//! Parsers never fail: a node with nothing to export yields `None` and the
//! reason is logged at debug level.

mod line;
mod rectangle;
mod text;

pub use line::parse_line;
pub use rectangle::{parse_block, parse_image};
pub use text::parse_text;

use crate::{ConvertOptions, Origin};

/// Per-node inputs shared by every parser
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub origin: Origin,
    /// Raw visitation index of the node, before normalization
    pub z_index: i64,
    pub options: &'a ConvertOptions,
}
