use super::ParseContext;
use crate::geometry::round_half_up;
use crate::paint::resolve_paints;
use blueprint_document::LineComponent;
use blueprint_scene::{LineNode, Mixed};
use tracing::debug;

/// A line is nothing but its stroke; without a resolvable stroke color it is
/// dropped.
pub fn parse_line(node: &LineNode, ctx: &ParseContext) -> Option<LineComponent> {
    let common = &node.common;
    if !common.visible {
        debug!(node = %common.name, "Skipping hidden line");
        return None;
    }

    let Some(color) = resolve_paints(&node.strokes) else {
        debug!(node = %common.name, "Skipping line without a visible solid stroke");
        return None;
    };

    let Some(bounds) = common.absolute_render_bounds else {
        debug!(node = %common.name, "Skipping line without render bounds");
        return None;
    };

    let width = match node.stroke_weight {
        Mixed::Uniform(weight) => round_half_up(weight),
        Mixed::Heterogeneous => 0,
    };

    Some(LineComponent {
        start_x: ctx.origin.offset_x(bounds.x),
        start_y: ctx.origin.offset_y(bounds.y),
        end_x: ctx.origin.offset_x(bounds.right()),
        end_y: ctx.origin.offset_y(bounds.bottom()),
        width,
        color: Some(color),
        z_index: ctx.z_index,
    })
}
