//! Headless lazy column.

use std::cell::RefCell;
use std::rc::Rc;

use dragdrop_foundation::{
    move_item, AutoScrollJob, LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource,
};

#[derive(Clone, Debug)]
struct FakeItem {
    key: u64,
    label: String,
    size: f32,
}

#[derive(Debug)]
struct PendingScroll {
    job: AutoScrollJob,
    remaining: f32,
}

#[derive(Debug, Default)]
struct ColumnInner {
    items: Vec<FakeItem>,
    next_key: u64,
    spacing: f32,
    viewport_size: f32,
    scroll_offset: f32,
    /// Largest distance applied per frame; `None` applies a scroll in one frame.
    scroll_step: Option<f32>,
    pending: Vec<PendingScroll>,
    /// History of issued jobs; grows until drained with `take_scroll_jobs`.
    jobs: Vec<AutoScrollJob>,
}

impl ColumnInner {
    fn content_size(&self) -> f32 {
        let sizes: f32 = self.items.iter().map(|item| item.size).sum();
        let gaps = self.items.len().saturating_sub(1) as f32;
        sizes + gaps * self.spacing
    }

    fn max_scroll_offset(&self) -> f32 {
        (self.content_size() - self.viewport_size).max(0.0)
    }
}

/// Virtualized list handle that lays items out along one axis.
///
/// Only items intersecting `[0, viewport_size)` are reported as visible.
/// Scroll requests are queued as [`AutoScrollJob`]s and applied by
/// [`advance_frame`](Self::advance_frame), the way a scroll animation would be.
/// Clones share state.
#[derive(Clone, Debug, Default)]
pub struct FakeLazyColumn {
    inner: Rc<RefCell<ColumnInner>>,
}

impl FakeLazyColumn {
    pub fn new(viewport_size: f32) -> Self {
        let column = Self::default();
        column.inner.borrow_mut().viewport_size = viewport_size;
        column
    }

    /// `count` items of `item_size` labelled `Item 0`, `Item 1`, ...
    pub fn uniform(count: usize, item_size: f32, viewport_size: f32) -> Self {
        let column = Self::new(viewport_size);
        for i in 0..count {
            column.push(format!("Item {i}"), item_size);
        }
        column
    }

    pub fn with_spacing(self, spacing: f32) -> Self {
        self.inner.borrow_mut().spacing = spacing;
        self
    }

    /// Limits how far a scroll advances per frame.
    pub fn with_scroll_step(self, step: f32) -> Self {
        self.inner.borrow_mut().scroll_step = Some(step.abs());
        self
    }

    /// Appends an item and returns its key.
    pub fn push(&self, label: impl Into<String>, size: f32) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let key = inner.next_key;
        inner.next_key += 1;
        inner.items.push(FakeItem {
            key,
            label: label.into(),
            size,
        });
        key
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.inner
            .borrow()
            .items
            .iter()
            .map(|item| item.label.clone())
            .collect()
    }

    pub fn keys(&self) -> Vec<u64> {
        self.inner.borrow().items.iter().map(|item| item.key).collect()
    }

    pub fn index_of_key(&self, key: u64) -> Option<usize> {
        self.inner
            .borrow()
            .items
            .iter()
            .position(|item| item.key == key)
    }

    pub fn viewport_size(&self) -> f32 {
        self.inner.borrow().viewport_size
    }

    pub fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_offset
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.inner.borrow().max_scroll_offset()
    }

    /// Jumps to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&self, offset: f32) {
        let mut inner = self.inner.borrow_mut();
        let max = inner.max_scroll_offset();
        inner.scroll_offset = offset.clamp(0.0, max);
    }

    /// Reorders the backing items. This is what `on_move` callbacks call.
    pub fn move_item(&self, from: usize, to: usize) -> bool {
        let moved = move_item(&mut self.inner.borrow_mut().items, from, to);
        if moved {
            log::trace!("column moved item {from} -> {to}");
        }
        moved
    }

    /// Every job handed out by [`scroll_by`](LazyListLayoutSource::scroll_by)
    /// since the last [`take_scroll_jobs`](Self::take_scroll_jobs), oldest
    /// first.
    pub fn scroll_jobs(&self) -> Vec<AutoScrollJob> {
        self.inner.borrow().jobs.clone()
    }

    /// Drains the job history. Jobs still animating keep running.
    pub fn take_scroll_jobs(&self) -> Vec<AutoScrollJob> {
        std::mem::take(&mut self.inner.borrow_mut().jobs)
    }

    /// Number of scrolls still being animated.
    pub fn pending_scrolls(&self) -> usize {
        self.inner
            .borrow()
            .pending
            .iter()
            .filter(|scroll| scroll.job.is_active())
            .count()
    }

    /// Applies one frame of every active scroll. Cancelled jobs are dropped
    /// untouched; a job completes once its distance is covered or the list
    /// hits an edge.
    ///
    /// Returns whether the scroll offset changed.
    pub fn advance_frame(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        let mut pending = std::mem::take(&mut inner.pending);
        let max_offset = inner.max_scroll_offset();
        let step = inner.scroll_step;
        let start_offset = inner.scroll_offset;

        for scroll in pending.iter_mut().filter(|scroll| scroll.job.is_active()) {
            let amount = match step {
                Some(step) => scroll.remaining.clamp(-step, step),
                None => scroll.remaining,
            };
            let target = (inner.scroll_offset + amount).clamp(0.0, max_offset);
            let applied = target - inner.scroll_offset;
            inner.scroll_offset = target;
            scroll.remaining -= amount;
            if scroll.remaining == 0.0 || applied != amount {
                scroll.job.complete();
            }
        }
        pending.retain(|scroll| scroll.job.is_active());
        inner.pending = pending;

        inner.scroll_offset != start_offset
    }
}

impl LazyListLayoutSource for FakeLazyColumn {
    fn layout_info(&self) -> LazyListLayoutInfo {
        let inner = self.inner.borrow();
        let mut visible = Vec::new();
        let mut position = 0.0;
        for (index, item) in inner.items.iter().enumerate() {
            let offset = position - inner.scroll_offset;
            if offset >= inner.viewport_size {
                break;
            }
            if offset + item.size > 0.0 {
                visible.push(LazyListItemInfo::new(index, item.key, offset, item.size));
            }
            position += item.size + inner.spacing;
        }
        LazyListLayoutInfo::new(visible, inner.items.len(), inner.viewport_size)
    }

    fn scroll_by(&self, delta: f32) -> AutoScrollJob {
        let job = AutoScrollJob::new(delta);
        let mut inner = self.inner.borrow_mut();
        inner.pending.push(PendingScroll {
            job: job.clone(),
            remaining: delta,
        });
        inner.jobs.push(job.clone());
        job
    }
}
