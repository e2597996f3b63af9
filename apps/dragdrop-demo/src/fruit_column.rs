//! Minimal list of fruit cards that scrolls synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use dragdrop_foundation::{
    move_item, AutoScrollJob, LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource,
};

/// A card and the key it keeps for its whole life.
#[derive(Clone, Copy)]
struct Card {
    key: u64,
    fruit: &'static str,
}

struct Inner {
    cards: Vec<Card>,
    card_size: f32,
    spacing: f32,
    viewport_size: f32,
    scroll_offset: f32,
}

impl Inner {
    fn max_scroll_offset(&self) -> f32 {
        let count = self.cards.len() as f32;
        let content = count * self.card_size + (count - 1.0).max(0.0) * self.spacing;
        (content - self.viewport_size).max(0.0)
    }
}

/// Column of equally sized cards, all sizes in pixels.
#[derive(Clone)]
pub struct FruitColumn {
    inner: Rc<RefCell<Inner>>,
}

impl FruitColumn {
    pub fn new(fruits: &[&'static str], card_size: f32, spacing: f32, viewport_size: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                cards: fruits
                    .iter()
                    .zip(0..)
                    .map(|(&fruit, key)| Card { key, fruit })
                    .collect(),
                card_size,
                spacing,
                viewport_size,
                scroll_offset: 0.0,
            })),
        }
    }

    pub fn fruits(&self) -> Vec<&'static str> {
        self.inner.borrow().cards.iter().map(|card| card.fruit).collect()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_offset
    }

    /// Distance between the leading edges of two neighbouring cards.
    pub fn row_size(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.card_size + inner.spacing
    }

    pub fn move_item(&self, from: usize, to: usize) {
        move_item(&mut self.inner.borrow_mut().cards, from, to);
    }
}

impl LazyListLayoutSource for FruitColumn {
    fn layout_info(&self) -> LazyListLayoutInfo {
        let inner = self.inner.borrow();
        let row = inner.card_size + inner.spacing;
        let visible = inner
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let offset = index as f32 * row - inner.scroll_offset;
                LazyListItemInfo::new(index, card.key, offset, inner.card_size)
            })
            .filter(|item| item.offset_end() > 0.0 && item.offset < inner.viewport_size)
            .collect();
        LazyListLayoutInfo::new(visible, inner.cards.len(), inner.viewport_size)
    }

    fn scroll_by(&self, delta: f32) -> AutoScrollJob {
        let mut inner = self.inner.borrow_mut();
        let max = inner.max_scroll_offset();
        inner.scroll_offset = (inner.scroll_offset + delta).clamp(0.0, max);
        log::debug!("scrolled to {}", inner.scroll_offset);
        AutoScrollJob::completed(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_cards_through_moves() {
        let column = FruitColumn::new(&["apple", "banana", "cherry"], 64.0, 10.0, 500.0);
        column.move_item(0, 2);
        let keys: Vec<u64> = column
            .layout_info()
            .visible_items_info
            .iter()
            .map(|item| item.key)
            .collect();
        assert_eq!(column.fruits(), vec!["banana", "cherry", "apple"]);
        assert_eq!(keys, vec![1, 2, 0]);
    }
}
