use serde::{Deserialize, Serialize};

/// Corner and stroke attributes shared by blocks and images.
///
/// Uniform and per-corner radii are mutually exclusive, as are the uniform
/// width (with its alignment) and the per-edge widths.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top_left_radius: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top_right_radius: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_bottom_left_radius: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_bottom_right_radius: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_right_width: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_left_width: Option<i64>,
}

impl BorderAttributes {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
