use super::ParseContext;
use crate::geometry::round_half_up;
use crate::paint::resolve_paints;
use blueprint_document::TextComponent;
use blueprint_scene::{LineHeight, Mixed, TextNode};
use tracing::debug;

/// Text needs a color: a node whose fills exist but do not resolve to a solid
/// color is dropped. A node without any fill is kept, colorless.
pub fn parse_text(node: &TextNode, ctx: &ParseContext) -> Option<TextComponent> {
    let common = &node.common;
    if !common.visible {
        debug!(node = %common.name, "Skipping hidden text");
        return None;
    }

    let Some(bounds) = common.absolute_render_bounds else {
        debug!(node = %common.name, "Skipping text without render bounds");
        return None;
    };

    let color = match &node.fills {
        Mixed::Uniform(fills) if !fills.is_empty() => match resolve_paints(fills) {
            Some(color) => Some(color),
            None => {
                debug!(node = %common.name, "Skipping text without a visible solid fill");
                return None;
            }
        },
        _ => None,
    };

    let font = match &node.font_name {
        Mixed::Uniform(font_name) => ctx.options.font_identifier(font_name),
        Mixed::Heterogeneous => ctx.options.default_font.clone(),
    };

    let font_size = match node.font_size {
        Mixed::Uniform(size) => size,
        Mixed::Heterogeneous => ctx.options.default_font_size,
    };

    let line_height = match node.line_height {
        Mixed::Uniform(LineHeight::Pixels { value }) => Some(value),
        _ => None,
    };

    let width = round_half_up(bounds.width).abs();
    // x anchors the horizontal center of the box
    let x = ctx.origin.offset_x(bounds.x) + (width as f64 / 2.0).ceil() as i64;

    Some(TextComponent {
        x,
        y: ctx.origin.offset_y(bounds.y),
        text: node.characters.clone(),
        width,
        font,
        font_size,
        line_height,
        color,
        text_align: node.text_align_horizontal.as_str().to_string(),
        z_index: ctx.z_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConvertOptions, Origin};
    use blueprint_scene::{FontName, Paint, Rect, TextAlign};

    fn context(options: &ConvertOptions) -> ParseContext<'_> {
        ParseContext {
            origin: Origin { x: 10, y: 20 },
            z_index: -3,
            options,
        }
    }

    #[test]
    fn test_center_anchor_and_offsets() {
        let options = ConvertOptions::default();
        let node = TextNode::new("Hello", Rect::new(30.0, 45.0, 41.0, 18.0))
            .with_fill(Paint::solid(0.0, 0.0, 0.0));

        let text = parse_text(&node, &context(&options)).unwrap();
        assert_eq!(text.width, 41);
        assert_eq!(text.x, 20 + 21);
        assert_eq!(text.y, 25);
        assert_eq!(text.color, Some("#000000".to_string()));
        assert_eq!(text.z_index, -3);
    }

    #[test]
    fn test_font_and_alignment() {
        let options = ConvertOptions::default();
        let mut node = TextNode::new("Title", Rect::new(10.0, 20.0, 100.0, 20.0))
            .with_font(FontName::new("Source Han Sans SC", "Medium"), 24.0);
        node.text_align_horizontal = TextAlign::Center;
        node.line_height = Mixed::Uniform(LineHeight::Pixels { value: 32.0 });

        let text = parse_text(&node, &context(&options)).unwrap();
        assert_eq!(text.font, "SourceHanSansSC-Medium");
        assert_eq!(text.font_size, 24.0);
        assert_eq!(text.text_align, "center");
        assert_eq!(text.line_height, Some(32.0));
        assert_eq!(text.color, None);
    }

    #[test]
    fn test_mixed_properties_use_defaults() {
        let options = ConvertOptions::default();
        let mut node = TextNode::new("Mixed", Rect::new(10.0, 20.0, 100.0, 20.0));
        node.font_name = Mixed::Heterogeneous;
        node.font_size = Mixed::Heterogeneous;
        node.line_height = Mixed::Heterogeneous;
        node.fills = Mixed::Heterogeneous;

        let text = parse_text(&node, &context(&options)).unwrap();
        assert_eq!(text.font, "SourceHanSansSC-Normal");
        assert_eq!(text.font_size, 18.0);
        assert_eq!(text.line_height, None);
        assert_eq!(text.color, None);
    }

    #[test]
    fn test_percent_line_height_is_omitted() {
        let options = ConvertOptions::default();
        let mut node = TextNode::new("Body", Rect::new(10.0, 20.0, 100.0, 20.0));
        node.line_height = Mixed::Uniform(LineHeight::Percent { value: 150.0 });

        let text = parse_text(&node, &context(&options)).unwrap();
        assert_eq!(text.line_height, None);
    }

    #[test]
    fn test_text_without_usable_fill_is_dropped() {
        let options = ConvertOptions::default();
        let bounds = Rect::new(10.0, 20.0, 100.0, 20.0);

        let hidden_fill =
            TextNode::new("a", bounds).with_fill(Paint::solid(1.0, 0.0, 0.0).hidden());
        assert!(parse_text(&hidden_fill, &context(&options)).is_none());

        let gradient = TextNode::new("b", bounds).with_fill(Paint::linear_gradient());
        assert!(parse_text(&gradient, &context(&options)).is_none());
    }

    #[test]
    fn test_hidden_text_is_dropped() {
        let options = ConvertOptions::default();
        let node = TextNode::new("Hidden", Rect::new(10.0, 20.0, 100.0, 20.0))
            .with_fill(Paint::solid(1.0, 0.0, 0.0))
            .hidden();
        assert!(parse_text(&node, &context(&options)).is_none());
    }
}
