use super::ParseContext;
use crate::border::resolve_border;
use crate::geometry::round_half_up;
use crate::paint::{first_visible, resolve_paints};
use blueprint_document::{BlockComponent, ImageComponent};
use blueprint_scene::{Mixed, Rect, RectangleNode};
use tracing::debug;

/// Layout box of a rectangle, or its render bounds when the host reports none
fn layout_bounds(node: &RectangleNode) -> Option<Rect> {
    node.common
        .absolute_bounding_box
        .or(node.common.absolute_render_bounds)
}

/// A plain rectangle. Missing or non-solid fills only drop the background.
pub fn parse_block(node: &RectangleNode, ctx: &ParseContext) -> Option<BlockComponent> {
    if !node.common.visible {
        debug!(node = %node.common.name, "Skipping hidden rectangle");
        return None;
    }

    let Some(bounds) = layout_bounds(node) else {
        debug!(node = %node.common.name, "Skipping rectangle without bounds");
        return None;
    };

    let background_color = match &node.fills {
        Mixed::Uniform(fills) => resolve_paints(fills),
        Mixed::Heterogeneous => None,
    };

    Some(BlockComponent {
        x: ctx.origin.offset_x(bounds.x),
        y: ctx.origin.offset_y(bounds.y),
        width: round_half_up(bounds.width),
        height: round_half_up(bounds.height),
        z_index: ctx.z_index,
        background_color,
        border: resolve_border(node),
    })
}

/// An asset rectangle. Its first visible fill must be an image, otherwise the
/// node exports nothing.
pub fn parse_image(node: &RectangleNode, ctx: &ParseContext) -> Option<ImageComponent> {
    if !node.common.visible {
        debug!(node = %node.common.name, "Skipping hidden image");
        return None;
    }

    let has_image_fill = match &node.fills {
        Mixed::Uniform(fills) => first_visible(fills).is_some_and(|paint| paint.is_image()),
        Mixed::Heterogeneous => false,
    };
    if !has_image_fill {
        debug!(node = %node.common.name, "Skipping asset without a visible image fill");
        return None;
    }

    let Some(bounds) = layout_bounds(node) else {
        debug!(node = %node.common.name, "Skipping image without bounds");
        return None;
    };

    Some(ImageComponent {
        x: ctx.origin.offset_x(bounds.x),
        y: ctx.origin.offset_y(bounds.y),
        url: ctx.options.image_placeholder.clone(),
        width: round_half_up(bounds.width),
        height: round_half_up(bounds.height),
        z_index: ctx.z_index,
        border: resolve_border(node),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConvertOptions, Origin};
    use blueprint_scene::Paint;

    fn context(options: &ConvertOptions) -> ParseContext<'_> {
        ParseContext {
            origin: Origin { x: 100, y: 100 },
            z_index: 0,
            options,
        }
    }

    #[test]
    fn test_block_uses_layout_box() {
        let options = ConvertOptions::default();
        let mut node = RectangleNode::new(Rect::new(110.0, 120.0, 50.0, 30.0))
            .with_fill(Paint::solid(0.2, 0.4, 1.0));
        node.common.absolute_render_bounds = Some(Rect::new(108.0, 118.0, 54.0, 34.0));

        let block = parse_block(&node, &context(&options)).unwrap();
        assert_eq!((block.x, block.y), (10, 20));
        assert_eq!((block.width, block.height), (50, 30));
        assert_eq!(block.background_color, Some("#3366ff".to_string()));
    }

    #[test]
    fn test_block_falls_back_to_render_bounds() {
        let options = ConvertOptions::default();
        let mut node = RectangleNode::new(Rect::new(110.0, 120.0, 50.0, 30.0));
        node.common.absolute_bounding_box = None;

        let block = parse_block(&node, &context(&options)).unwrap();
        assert_eq!((block.x, block.y), (10, 20));
    }

    #[test]
    fn test_block_keeps_unresolved_background() {
        let options = ConvertOptions::default();
        let node = RectangleNode::new(Rect::new(100.0, 100.0, 50.0, 30.0))
            .with_fill(Paint::solid(1.0, 0.0, 0.0).hidden())
            .with_fill(Paint::linear_gradient());

        let block = parse_block(&node, &context(&options)).unwrap();
        assert_eq!(block.background_color, None);
        assert!(block.border.is_empty());
    }

    #[test]
    fn test_image_gets_placeholder_and_border() {
        let options = ConvertOptions::default();
        let node = RectangleNode::new(Rect::new(100.0, 100.0, 64.0, 64.0))
            .with_fill(Paint::image())
            .with_corner_radius(32.0)
            .as_asset();

        let image = parse_image(&node, &context(&options)).unwrap();
        assert_eq!(image.url, "Please replace with accessible image url");
        assert_eq!(image.border.border_radius, Some(32));
        assert_eq!((image.width, image.height), (64, 64));
    }

    #[test]
    fn test_image_requires_visible_image_fill() {
        let options = ConvertOptions::default();
        let bounds = Rect::new(100.0, 100.0, 64.0, 64.0);

        let no_fill = RectangleNode::new(bounds).as_asset();
        assert!(parse_image(&no_fill, &context(&options)).is_none());

        let solid_on_top = RectangleNode::new(bounds)
            .with_fill(Paint::solid(1.0, 1.0, 1.0))
            .with_fill(Paint::image())
            .as_asset();
        assert!(parse_image(&solid_on_top, &context(&options)).is_none());

        let hidden_image = RectangleNode::new(bounds)
            .with_fill(Paint::image().hidden())
            .as_asset();
        assert!(parse_image(&hidden_image, &context(&options)).is_none());
    }
}
