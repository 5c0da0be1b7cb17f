use crate::geometry::round_half_up;
use blueprint_scene::{Paint, PaintKind, Rgb};

/// The paint that decides a node's color: the first visible entry in list
/// order. Later visible entries are never consulted.
pub fn first_visible(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().find(|paint| paint.visible)
}

/// `#rrggbb` for a solid paint; `None` for every other kind
pub fn paint_to_hex(paint: &Paint) -> Option<String> {
    match &paint.kind {
        PaintKind::Solid { color } => rgb_to_hex(color),
        _ => None,
    }
}

/// Color of the first visible paint, if that paint is solid
pub fn resolve_paints(paints: &[Paint]) -> Option<String> {
    first_visible(paints).and_then(paint_to_hex)
}

/// Fails when a channel lies outside `0.0..=1.0`.
pub fn rgb_to_hex(color: &Rgb) -> Option<String> {
    let r = channel(color.r)?;
    let g = channel(color.g)?;
    let b = channel(color.b)?;
    Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
}

fn channel(value: f64) -> Option<u8> {
    if !(0.0..=1.0).contains(&value) {
        return None;
    }
    u8::try_from(round_half_up(value * 255.0)).ok()
}
