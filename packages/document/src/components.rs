use crate::number::{compact, compact_opt};
use crate::BorderAttributes;
use serde::{Deserialize, Serialize};

/// A run of text.
///
/// `x` is the horizontal center of the text box, `y` its top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    pub x: i64,
    pub y: i64,
    pub text: String,
    pub width: i64,
    pub font: String,

    #[serde(serialize_with = "compact")]
    pub font_size: f64,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "compact_opt"
    )]
    pub line_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub text_align: String,
    pub z_index: i64,
}

/// A filled rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockComponent {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub z_index: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(flatten)]
    pub border: BorderAttributes,
}

/// A bitmap slot. `url` is a placeholder the consumer replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageComponent {
    pub x: i64,
    pub y: i64,
    pub url: String,
    pub width: i64,
    pub height: i64,
    pub z_index: i64,

    #[serde(flatten)]
    pub border: BorderAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineComponent {
    pub start_x: i64,
    pub start_y: i64,
    pub end_x: i64,
    pub end_y: i64,
    pub width: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub z_index: i64,
}

/// Reserved for renderers that draw QR codes; conversion never produces one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrcodeComponent {
    pub x: i64,
    pub y: i64,
    pub size: i64,
    pub content: String,
    pub foreground_color: String,
    pub background_color: String,
    pub z_index: i64,
}
