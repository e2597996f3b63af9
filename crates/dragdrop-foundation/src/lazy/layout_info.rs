use crate::drag_drop::AutoScrollJob;

/// Information about a single visible item in a lazy list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyListItemInfo {
    /// Index of the item in the data source.
    pub index: usize,

    /// Key of the item.
    pub key: u64,

    /// Offset of the item's leading edge in viewport coordinates.
    pub offset: f32,

    /// Size of the item in the main axis.
    pub size: f32,
}

impl LazyListItemInfo {
    pub fn new(index: usize, key: u64, offset: f32, size: f32) -> Self {
        Self {
            index,
            key,
            offset,
            size,
        }
    }

    /// Trailing edge of the item (bottom for a vertical list).
    #[inline]
    pub fn offset_end(&self) -> f32 {
        self.offset + self.size
    }

    /// Whether `position` falls inside the half-open span `[offset, offset_end)`.
    #[inline]
    pub fn contains(&self, position: f32) -> bool {
        position >= self.offset && position < self.offset_end()
    }

    /// Whether the span strictly overlaps `[start, end)`. Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, start: f32, end: f32) -> bool {
        self.offset_end() > start && self.offset < end
    }
}

/// Information about the currently visible items in a lazy list.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct LazyListLayoutInfo {
    /// Information about each visible item, in visual order.
    pub visible_items_info: Vec<LazyListItemInfo>,

    /// Total number of items in the list.
    pub total_items_count: usize,

    /// Size of the viewport in the main axis.
    pub viewport_size: f32,

    /// Leading bound of the viewport.
    pub viewport_start_offset: f32,

    /// Trailing bound of the viewport.
    pub viewport_end_offset: f32,
}

impl LazyListLayoutInfo {
    /// Layout for a viewport spanning `[0, viewport_size)`.
    pub fn new(
        visible_items_info: Vec<LazyListItemInfo>,
        total_items_count: usize,
        viewport_size: f32,
    ) -> Self {
        Self {
            visible_items_info,
            total_items_count,
            viewport_size,
            viewport_start_offset: 0.0,
            viewport_end_offset: viewport_size,
        }
    }

    /// Returns the layout record for an absolute item index, or `None` when
    /// the item is not currently laid out.
    ///
    /// Visible items normally form a contiguous run, so the lookup is index
    /// arithmetic relative to the first visible item. If the run has holes the
    /// arithmetic guess is verified and a linear scan takes over.
    pub fn visible_item_for(&self, absolute_index: usize) -> Option<&LazyListItemInfo> {
        let first = self.visible_items_info.first()?;
        let relative = absolute_index.checked_sub(first.index)?;
        match self.visible_items_info.get(relative) {
            Some(item) if item.index == absolute_index => Some(item),
            _ => self
                .visible_items_info
                .iter()
                .find(|item| item.index == absolute_index),
        }
    }

    /// Returns the first visible item whose span contains `position`.
    pub fn item_at(&self, position: f32) -> Option<&LazyListItemInfo> {
        self.visible_items_info
            .iter()
            .find(|item| item.contains(position))
    }

    /// Index of the first visible item, if any.
    pub fn first_visible_index(&self) -> Option<usize> {
        self.visible_items_info.first().map(|item| item.index)
    }

    /// Index of the last visible item, if any.
    pub fn last_visible_index(&self) -> Option<usize> {
        self.visible_items_info.last().map(|item| item.index)
    }

    pub fn is_empty(&self) -> bool {
        self.visible_items_info.is_empty()
    }
}

/// Rendering-layer collaborator of a drag-reorder list.
///
/// Implementations are handles onto the list the user sees: they report its
/// current layout and perform programmatic scrolls. Methods take `&self`;
/// implementors keep their mutable state behind `Rc<RefCell<..>>` the same way
/// list state holders do.
pub trait LazyListLayoutSource {
    /// Layout info from the last measure pass.
    fn layout_info(&self) -> LazyListLayoutInfo;

    /// Starts scrolling the viewport by `delta` pixels along the main axis.
    ///
    /// The returned job stays active until the scroll has been applied (the
    /// implementation completes it) or the drag cancels it.
    fn scroll_by(&self, delta: f32) -> AutoScrollJob;
}
