use crate::{BlockComponent, ImageComponent, LineComponent, QrcodeComponent, TextComponent};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// The exported document.
///
/// Every collection is always present in memory and appended to in discovery
/// order; empty ones are left out when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub width: i64,
    pub height: i64,
    pub background_color: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub texts: Vec<TextComponent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockComponent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageComponent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineComponent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qrcodes: Vec<QrcodeComponent>,
}

impl Blueprint {
    pub fn new(width: i64, height: i64) -> Self {
        Self::with_background(width, height, DEFAULT_BACKGROUND_COLOR)
    }

    pub fn with_background(width: i64, height: i64, background_color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background_color: background_color.into(),
            texts: Vec::new(),
            blocks: Vec::new(),
            images: Vec::new(),
            lines: Vec::new(),
            qrcodes: Vec::new(),
        }
    }

    pub fn add_text(&mut self, text: TextComponent) {
        self.texts.push(text);
    }

    pub fn add_block(&mut self, block: BlockComponent) {
        self.blocks.push(block);
    }

    pub fn add_image(&mut self, image: ImageComponent) {
        self.images.push(image);
    }

    pub fn add_line(&mut self, line: LineComponent) {
        self.lines.push(line);
    }

    pub fn component_count(&self) -> usize {
        self.texts.len()
            + self.blocks.len()
            + self.images.len()
            + self.lines.len()
            + self.qrcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.component_count() == 0
    }

    /// Stacking order of every component, collection by collection
    pub fn z_indices(&self) -> impl Iterator<Item = i64> + '_ {
        self.texts
            .iter()
            .map(|c| c.z_index)
            .chain(self.blocks.iter().map(|c| c.z_index))
            .chain(self.images.iter().map(|c| c.z_index))
            .chain(self.lines.iter().map(|c| c.z_index))
            .chain(self.qrcodes.iter().map(|c| c.z_index))
    }

    pub fn z_indices_mut(&mut self) -> impl Iterator<Item = &mut i64> + '_ {
        self.texts
            .iter_mut()
            .map(|c| &mut c.z_index)
            .chain(self.blocks.iter_mut().map(|c| &mut c.z_index))
            .chain(self.images.iter_mut().map(|c| &mut c.z_index))
            .chain(self.lines.iter_mut().map(|c| &mut c.z_index))
            .chain(self.qrcodes.iter_mut().map(|c| &mut c.z_index))
    }
}
