use blueprint_document::DEFAULT_BACKGROUND_COLOR;
use blueprint_scene::FontName;
use serde::{Deserialize, Serialize};

/// Options for blueprint conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Font identifier used for every family the renderer does not ship
    pub default_font: String,
    /// The one family the renderer ships; mapped to `<Family>-<Style>`
    pub recognized_font_family: String,
    /// Used when a text node mixes several font sizes
    pub default_font_size: f64,
    /// Written as the `url` of every image component
    pub image_placeholder: String,
    pub background_color: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            default_font: "SourceHanSansSC-Normal".to_string(),
            recognized_font_family: "Source Han Sans SC".to_string(),
            default_font_size: 18.0,
            image_placeholder: "Please replace with accessible image url".to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Renderer font identifier for a host font
    pub fn font_identifier(&self, font: &FontName) -> String {
        if font.family == self.recognized_font_family {
            let family: String = font.family.split_whitespace().collect();
            format!("{}-{}", family, font.style)
        } else {
            self.default_font.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_family() {
        let options = ConvertOptions::default();
        let font = FontName::new("Source Han Sans SC", "Bold");
        assert_eq!(options.font_identifier(&font), "SourceHanSansSC-Bold");
    }

    #[test]
    fn test_unknown_family_falls_back() {
        let options = ConvertOptions::default();
        let font = FontName::new("Inter", "Bold");
        assert_eq!(options.font_identifier(&font), "SourceHanSansSC-Normal");
    }

    #[test]
    fn test_partial_options_json() {
        let options: ConvertOptions =
            serde_json::from_str(r#"{ "defaultFontSize": 14, "imagePlaceholder": "TBD" }"#).unwrap();
        assert_eq!(options.default_font_size, 14.0);
        assert_eq!(options.image_placeholder, "TBD");
        assert_eq!(options.default_font, "SourceHanSansSC-Normal");
    }
}
