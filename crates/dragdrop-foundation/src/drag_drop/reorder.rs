//! Applying reorder callbacks to a backing collection.
//!
//! `on_move(from, to)` means "take the element at `from` out and insert it so
//! it ends up at `to`". That is a single-element move, not a swap: dragging an
//! element three slots down in one event shifts the three elements it passed
//! up by one.

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// Returns `false` without touching the list when the indices are equal or
/// out of range.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let element = items.remove(from);
    items.insert(to, element);
    true
}

/// Exchanges the elements at `a` and `b`.
///
/// Equivalent to [`move_item`] only for adjacent indices. Provided for callers
/// that store reorder results as pairwise swaps; the controller's callbacks are
/// meant for [`move_item`].
pub fn swap_items<T>(items: &mut [T], a: usize, b: usize) -> bool {
    if a == b || a >= items.len() || b >= items.len() {
        return false;
    }
    items.swap(a, b);
    true
}
