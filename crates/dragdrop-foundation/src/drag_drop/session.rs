//! Immutable drag session snapshots.

use crate::lazy::{LazyListItemInfo, LazyListLayoutInfo};

/// Snapshot of an active drag.
///
/// The controller never mutates a session in place: every event builds the
/// next snapshot and replaces the previous one, so observers always see a
/// consistent value. Dragged index and initial layout live in the same value,
/// so one can't exist without the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    dragged_item_index: usize,
    initial_item: LazyListItemInfo,
    accumulated_delta: f32,
}

impl DragSession {
    /// Opens a session on `item`, which becomes both the dragged element and
    /// the layout anchor for the rest of the drag.
    pub fn start(item: LazyListItemInfo) -> Self {
        Self {
            dragged_item_index: item.index,
            initial_item: item,
            accumulated_delta: 0.0,
        }
    }

    /// Absolute index of the dragged element in the backing list right now.
    pub fn dragged_item_index(&self) -> usize {
        self.dragged_item_index
    }

    /// Layout of the dragged element when the drag started.
    pub fn initial_item(&self) -> LazyListItemInfo {
        self.initial_item
    }

    /// Index the dragged element had when the drag started.
    pub fn origin_index(&self) -> usize {
        self.initial_item.index
    }

    /// Key of the dragged element.
    pub fn key(&self) -> u64 {
        self.initial_item.key
    }

    /// Main-axis distance the pointer travelled since the drag started.
    pub fn accumulated_delta(&self) -> f32 {
        self.accumulated_delta
    }

    /// Leading edge of the dragged element as the user sees it.
    pub fn projected_start(&self) -> f32 {
        self.initial_item.offset + self.accumulated_delta
    }

    /// Trailing edge of the dragged element as the user sees it.
    pub fn projected_end(&self) -> f32 {
        self.initial_item.offset_end() + self.accumulated_delta
    }

    /// How far the dragged element must be drawn away from its layout slot.
    ///
    /// `None` when the element is not laid out in `layout` (scrolled away).
    pub fn displacement(&self, layout: &LazyListLayoutInfo) -> Option<f32> {
        layout
            .visible_item_for(self.dragged_item_index)
            .map(|current| self.projected_start() - current.offset)
    }

    pub(crate) fn with_delta(self, delta: f32) -> Self {
        Self {
            accumulated_delta: self.accumulated_delta + delta,
            ..self
        }
    }

    pub(crate) fn with_dragged_index(self, index: usize) -> Self {
        Self {
            dragged_item_index: index,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_anchors_on_item() {
        let item = LazyListItemInfo::new(4, 40, 120.0, 60.0);
        let session = DragSession::start(item);
        assert_eq!(session.dragged_item_index(), 4);
        assert_eq!(session.origin_index(), 4);
        assert_eq!(session.key(), 40);
        assert_eq!(session.accumulated_delta(), 0.0);
        assert_eq!(session.projected_start(), 120.0);
        assert_eq!(session.projected_end(), 180.0);
    }

    #[test]
    fn updates_return_new_snapshots() {
        let start = DragSession::start(LazyListItemInfo::new(0, 0, 0.0, 100.0));
        let moved = start.with_delta(30.0).with_delta(-5.0).with_dragged_index(1);
        assert_eq!(start.accumulated_delta(), 0.0);
        assert_eq!(moved.accumulated_delta(), 25.0);
        assert_eq!(moved.dragged_item_index(), 1);
        assert_eq!(moved.origin_index(), 0);
        assert_eq!(moved.projected_end(), 125.0);
    }

    #[test]
    fn displacement_is_relative_to_current_slot() {
        let layout = LazyListLayoutInfo::new(
            (0..5)
                .map(|i| LazyListItemInfo::new(i, i as u64, i as f32 * 100.0, 100.0))
                .collect(),
            5,
            500.0,
        );
        let session = DragSession::start(layout.visible_items_info[0]).with_delta(150.0);
        assert_eq!(session.displacement(&layout), Some(150.0));
        // After moving to slot 1 the element sits at 100, drawn 50 further down.
        assert_eq!(session.with_dragged_index(1).displacement(&layout), Some(50.0));
        assert_eq!(session.with_dragged_index(9).displacement(&layout), None);
    }
}
