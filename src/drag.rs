// Drag module - shortcut drag gestures within and across rails
//
// The gesture state is a plain value (`DragPayload`) owned by the page while
// a drag is in progress. It travels with every hover/drop callback so a drop
// target can tell a reorder from a cross-rail transfer without looking the
// entry up anywhere.

use crate::shortcuts::{ShortcutEntry, ShortcutId, Side};

// ============================================================================
// Drag Payload
// ============================================================================

/// Data carried by a shortcut being dragged
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub id: ShortcutId,
    /// Current index on the origin rail (updated as hover moves commit)
    pub index: usize,
    /// Rail the drag started on
    pub side: Side,
    /// Snapshot of the entry when the drag started
    pub entry: ShortcutEntry,
}

impl DragPayload {
    pub fn new(entry: &ShortcutEntry, index: usize) -> Self {
        Self {
            id: entry.id.clone(),
            index,
            side: entry.side,
            entry: entry.clone(),
        }
    }

    /// Decide whether hovering over `hover_index` on `target` should move the
    /// dragged entry there
    ///
    /// Returns `(from, to)` for the reorder to apply and advances `index` to
    /// `to`, so following hovers compare against the entry's new position.
    pub fn hover_target(
        &mut self,
        target: Side,
        hover_index: usize,
        geometry: HoverGeometry,
    ) -> Option<(usize, usize)> {
        if target != self.side {
            return None;
        }
        if !should_commit_hover(self.index, hover_index, geometry) {
            return None;
        }
        let from = self.index;
        self.index = hover_index;
        Some((from, hover_index))
    }
}

// ============================================================================
// Hover Tie-break
// ============================================================================

/// Vertical geometry of a hovered entry and the pointer, in client pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverGeometry {
    /// Top edge of the hovered entry
    pub top: f64,
    /// Height of the hovered entry
    pub height: f64,
    /// Pointer Y position
    pub pointer_y: f64,
}

impl HoverGeometry {
    fn middle(&self) -> f64 {
        self.height / 2.0
    }

    fn pointer_offset(&self) -> f64 {
        self.pointer_y - self.top
    }
}

/// Midpoint rule for committing a hover move
///
/// Dragging downward commits only once the pointer is past the middle of the
/// hovered entry; dragging upward only once it is above the middle. Without
/// this the two entries would swap back and forth while the pointer moves.
pub fn should_commit_hover(drag_index: usize, hover_index: usize, geometry: HoverGeometry) -> bool {
    if drag_index == hover_index {
        return false;
    }

    let middle = geometry.middle();
    let offset = geometry.pointer_offset();

    if drag_index < hover_index && offset < middle {
        return false;
    }
    if drag_index > hover_index && offset > middle {
        return false;
    }
    true
}

// ============================================================================
// Drop Classification
// ============================================================================

/// What a drop onto a rail means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    /// Dropped on its own rail; hover moves already applied the new order
    Reorder,
    /// Dropped on the other rail
    Transfer { from: Side, to: Side },
}

pub fn classify_drop(payload: &DragPayload, target: Side) -> DropKind {
    if payload.side == target {
        DropKind::Reorder
    } else {
        DropKind::Transfer {
            from: payload.side,
            to: target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::tests::{draft, labels};
    use crate::shortcuts::Board;

    const ROW: f64 = 40.0;

    /// Geometry for hovering entry `index` with the pointer `offset` px into it
    fn over(index: usize, offset: f64) -> HoverGeometry {
        let top = index as f64 * ROW;
        HoverGeometry {
            top,
            height: ROW,
            pointer_y: top + offset,
        }
    }

    fn board() -> Board {
        let mut board = Board::default();
        for label in ["0", "1", "2", "3"] {
            board.add(Side::Left, draft(label)).unwrap();
        }
        board
    }

    #[test]
    fn test_downward_commits_past_midpoint() {
        assert!(!should_commit_hover(0, 2, over(2, 10.0)));
        assert!(should_commit_hover(0, 2, over(2, 30.0)));
    }

    #[test]
    fn test_upward_commits_before_midpoint() {
        assert!(!should_commit_hover(3, 1, over(1, 30.0)));
        assert!(should_commit_hover(3, 1, over(1, 10.0)));
    }

    #[test]
    fn test_midpoint_commits_in_both_directions() {
        assert!(should_commit_hover(0, 2, over(2, ROW / 2.0)));
        assert!(should_commit_hover(3, 1, over(1, ROW / 2.0)));
    }

    #[test]
    fn test_entry_edges() {
        // Downward: top edge waits, bottom edge commits
        assert!(!should_commit_hover(0, 2, over(2, 0.0)));
        assert!(should_commit_hover(0, 2, over(2, ROW)));
        // Upward: top edge commits, bottom edge waits
        assert!(should_commit_hover(3, 1, over(1, 0.0)));
        assert!(!should_commit_hover(3, 1, over(1, ROW)));
    }

    #[test]
    fn test_same_index_never_commits() {
        assert!(!should_commit_hover(1, 1, over(1, 0.0)));
        assert!(!should_commit_hover(1, 1, over(1, ROW)));
    }

    #[test]
    fn test_drag_past_midpoint_reorders() {
        let mut board = board();
        let entry = board.rail(Side::Left).entries()[0].clone();
        let mut payload = DragPayload::new(&entry, 0);

        // Pointer still in the top half of entry 2: nothing happens
        assert_eq!(payload.hover_target(Side::Left, 2, over(2, 5.0)), None);
        assert_eq!(labels(board.rail(Side::Left)), vec!["0", "1", "2", "3"]);

        let (from, to) = payload
            .hover_target(Side::Left, 2, over(2, 25.0))
            .unwrap();
        board.reorder(Side::Left, from, to).unwrap();

        assert_eq!(labels(board.rail(Side::Left)), vec!["1", "2", "0", "3"]);
        assert_eq!(payload.index, 2);
    }

    #[test]
    fn test_hover_does_not_oscillate() {
        let entry = board().rail(Side::Left).entries()[0].clone();
        let mut payload = DragPayload::new(&entry, 0);

        assert_eq!(
            payload.hover_target(Side::Left, 1, over(1, 30.0)),
            Some((0, 1))
        );
        // Now at index 1; hovering the same entry again is a no-op
        assert_eq!(payload.hover_target(Side::Left, 1, over(1, 35.0)), None);
        // Moving back up over entry 0 only commits above its midpoint
        assert_eq!(payload.hover_target(Side::Left, 0, over(0, 30.0)), None);
        assert_eq!(
            payload.hover_target(Side::Left, 0, over(0, 5.0)),
            Some((1, 0))
        );
    }

    #[test]
    fn test_hover_on_other_rail_is_ignored() {
        let entry = board().rail(Side::Left).entries()[0].clone();
        let mut payload = DragPayload::new(&entry, 0);
        assert_eq!(payload.hover_target(Side::Right, 2, over(2, 39.0)), None);
        assert_eq!(payload.index, 0);
    }

    #[test]
    fn test_classify_drop() {
        let entry = board().rail(Side::Left).entries()[1].clone();
        let payload = DragPayload::new(&entry, 1);
        assert_eq!(classify_drop(&payload, Side::Left), DropKind::Reorder);
        assert_eq!(
            classify_drop(&payload, Side::Right),
            DropKind::Transfer {
                from: Side::Left,
                to: Side::Right
            }
        );
    }
}
