use blueprint_document::Blueprint;

/// Hands out one visitation index per visited node: `0, -1, -2, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisitOrder {
    next: i64,
}

impl VisitOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for the node being visited now
    pub fn advance(&mut self) -> i64 {
        let current = self.next;
        self.next -= 1;
        current
    }

    pub fn visited(&self) -> usize {
        self.next.unsigned_abs() as usize
    }

    /// Lowest index handed out so far, or 0 before the first visit
    pub fn floor(&self) -> i64 {
        (self.next + 1).min(0)
    }
}

/// Shifts every component by the same floor so that all zIndex values are
/// non-negative. Applied document-wide to keep ordering across kinds.
pub fn normalize_z_indices(blueprint: &mut Blueprint, floor: i64) {
    for z_index in blueprint.z_indices_mut() {
        *z_index -= floor;
    }
}
