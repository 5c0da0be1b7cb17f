//! # Blueprint Scene
//!
//! Point-in-time snapshot of a design surface selection.
//!
//! The host exports its node tree as JSON using its own property names. This
//! crate models that tree as a closed set of node kinds (group, text,
//! rectangle, line) plus a catch-all for everything the converter does not
//! understand. Properties that the host may report as heterogeneous across
//! sub-parts of a node are wrapped in [`Mixed`].
//!
//! ```rust,ignore
//! use blueprint_scene::Snapshot;
//!
//! let snapshot = Snapshot::from_json(&source)?;
//! let root = snapshot.single()?;
//! ```

mod error;
mod geometry;
mod mixed;
mod node;
mod paint;
mod snapshot;

pub use error::{SceneError, SceneResult};
pub use geometry::Rect;
pub use mixed::Mixed;
pub use node::{
    CornerRadii, FontName, GroupNode, LineHeight, LineNode, NodeCommon, RectangleNode, SceneNode,
    StrokeAlign, StrokeWeights, TextAlign, TextNode, UnsupportedNode,
};
pub use paint::{Paint, PaintKind, Rgb};
pub use snapshot::Snapshot;
