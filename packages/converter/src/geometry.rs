use blueprint_scene::Rect;

/// Rounds to the nearest integer, halves toward positive infinity
/// (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounded top-left corner of the selection's render bounds.
///
/// Every emitted position is a signed offset from this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub x: i64,
    pub y: i64,
}

impl Origin {
    pub fn of(bounds: &Rect) -> Self {
        Self {
            x: round_half_up(bounds.x),
            y: round_half_up(bounds.y),
        }
    }

    pub fn offset_x(&self, x: f64) -> i64 {
        round_half_up(x) - self.x
    }

    pub fn offset_y(&self, y: f64) -> i64 {
        round_half_up(y) - self.y
    }
}
