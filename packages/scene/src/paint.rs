use serde::{Deserialize, Serialize};

/// Color channels normalized to `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Fill or stroke descriptor.
///
/// Visibility belongs to the paint itself and is independent of the
/// visibility of the node that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(flatten)]
    pub kind: PaintKind,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid {
        color: Rgb,
    },
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image {
        #[serde(rename = "imageHash", default, skip_serializing_if = "Option::is_none")]
        image_hash: Option<String>,
    },
    Video,
    /// Any paint type this crate does not model, such as `PATTERN`
    #[serde(other)]
    Other,
}

fn default_visible() -> bool {
    true
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self::from_kind(PaintKind::Solid {
            color: Rgb::new(r, g, b),
        })
    }

    pub fn image() -> Self {
        Self::from_kind(PaintKind::Image { image_hash: None })
    }

    pub fn linear_gradient() -> Self {
        Self::from_kind(PaintKind::GradientLinear)
    }

    pub fn from_kind(kind: PaintKind) -> Self {
        Self {
            kind,
            visible: true,
            opacity: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, PaintKind::Image { .. })
    }
}
