use crate::geometry::round_half_up;
use crate::paint::resolve_paints;
use blueprint_document::BorderAttributes;
use blueprint_scene::{Mixed, RectangleNode};

/// Corner radius and stroke attributes of a rectangle.
///
/// Only positive radii and widths are emitted. A hidden rectangle yields no
/// attributes at all.
pub fn resolve_border(node: &RectangleNode) -> BorderAttributes {
    let mut border = BorderAttributes::default();
    if !node.common.visible {
        return border;
    }

    match node.corner_radius {
        Mixed::Uniform(radius) => border.border_radius = positive(radius),
        Mixed::Heterogeneous => {
            let radii = &node.radii;
            border.border_top_left_radius = positive(radii.top_left_radius);
            border.border_top_right_radius = positive(radii.top_right_radius);
            border.border_bottom_left_radius = positive(radii.bottom_left_radius);
            border.border_bottom_right_radius = positive(radii.bottom_right_radius);
        }
    }

    if node.strokes.is_empty() {
        return border;
    }

    border.border_color = resolve_paints(&node.strokes);

    match node.stroke_weight {
        Mixed::Uniform(weight) => {
            if let Some(width) = positive(weight) {
                border.border_width = Some(width);
                border.stroke_align = Some(node.stroke_align.as_str().to_string());
            }
        }
        Mixed::Heterogeneous => {
            let weights = &node.stroke_weights;
            border.border_top_width = positive(weights.stroke_top_weight);
            border.border_right_width = positive(weights.stroke_right_weight);
            border.border_bottom_width = positive(weights.stroke_bottom_weight);
            border.border_left_width = positive(weights.stroke_left_weight);
        }
    }

    border
}

fn positive(value: f64) -> Option<i64> {
    (value > 0.0).then(|| round_half_up(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_scene::{CornerRadii, Paint, Rect, StrokeAlign, StrokeWeights};

    fn rect() -> RectangleNode {
        RectangleNode::new(Rect::new(0.0, 0.0, 100.0, 40.0))
    }

    #[test]
    fn test_plain_rectangle_has_no_border() {
        assert!(resolve_border(&rect()).is_empty());
    }

    #[test]
    fn test_uniform_radius() {
        let border = resolve_border(&rect().with_corner_radius(7.6));
        assert_eq!(border.border_radius, Some(8));
        assert_eq!(border.border_top_left_radius, None);
    }

    #[test]
    fn test_mixed_radius_emits_positive_corners_only() {
        let node = rect().with_corner_radii(CornerRadii {
            top_left_radius: 4.0,
            top_right_radius: 0.0,
            bottom_left_radius: 0.0,
            bottom_right_radius: 12.0,
        });

        let border = resolve_border(&node);
        assert_eq!(border.border_radius, None);
        assert_eq!(border.border_top_left_radius, Some(4));
        assert_eq!(border.border_top_right_radius, None);
        assert_eq!(border.border_bottom_left_radius, None);
        assert_eq!(border.border_bottom_right_radius, Some(12));
    }

    #[test]
    fn test_uniform_stroke_carries_alignment() {
        let mut node = rect().with_stroke(Paint::solid(0.0, 0.0, 0.0), 2.0);
        node.stroke_align = StrokeAlign::Outside;

        let border = resolve_border(&node);
        assert_eq!(border.border_color, Some("#000000".to_string()));
        assert_eq!(border.border_width, Some(2));
        assert_eq!(border.stroke_align, Some("OUTSIDE".to_string()));
    }

    #[test]
    fn test_per_edge_widths() {
        let mut node = rect().with_stroke(Paint::solid(0.0, 0.0, 0.0), 1.0);
        node.stroke_weight = Mixed::Heterogeneous;
        node.stroke_weights = StrokeWeights {
            stroke_top_weight: 1.0,
            stroke_right_weight: 0.0,
            stroke_bottom_weight: 3.0,
            stroke_left_weight: 0.0,
        };

        let border = resolve_border(&node);
        assert_eq!(border.border_width, None);
        assert_eq!(border.stroke_align, None);
        assert_eq!(border.border_top_width, Some(1));
        assert_eq!(border.border_right_width, None);
        assert_eq!(border.border_bottom_width, Some(3));
        assert_eq!(border.border_left_width, None);
    }

    #[test]
    fn test_hidden_stroke_keeps_width_but_not_color() {
        let node = rect().with_stroke(Paint::solid(0.0, 0.0, 0.0).hidden(), 1.0);
        let border = resolve_border(&node);
        assert_eq!(border.border_color, None);
        assert_eq!(border.border_width, Some(1));
    }

    #[test]
    fn test_zero_weight_emits_nothing() {
        let node = rect().with_stroke(Paint::solid(0.0, 0.0, 0.0), 0.0);
        let border = resolve_border(&node);
        assert_eq!(border.border_width, None);
        assert_eq!(border.stroke_align, None);
    }

    #[test]
    fn test_hidden_rectangle_contributes_nothing() {
        let node = rect()
            .with_corner_radius(4.0)
            .with_stroke(Paint::solid(0.0, 0.0, 0.0), 1.0)
            .hidden();
        assert!(resolve_border(&node).is_empty());
    }
}
