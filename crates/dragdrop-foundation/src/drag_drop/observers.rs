//! Explicit observer registration for drag session changes.

use std::rc::Rc;

use smallvec::SmallVec;

use super::DragSession;

/// Identifies a registered observer so it can be removed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Callback receiving the new snapshot, or `None` once the drag is over.
pub type SessionObserver = Rc<dyn Fn(Option<DragSession>)>;

/// Registry of session observers.
///
/// A list usually has one or two observers (the item renderer and maybe a
/// debug overlay), so they are stored inline.
#[derive(Default)]
pub struct SessionObservers {
    observers: SmallVec<[(ObserverId, SessionObserver); 2]>,
    next_id: u64,
}

impl SessionObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: SessionObserver) -> ObserverId {
        self.next_id += 1;
        let id = ObserverId(self.next_id);
        self.observers.push((id, observer));
        id
    }

    /// Returns whether an observer was removed.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer in registration order.
    pub fn notify(&self, session: Option<DragSession>) {
        for (_, observer) in &self.observers {
            observer(session);
        }
    }
}

impl std::fmt::Debug for SessionObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionObservers")
            .field("count", &self.observers.len())
            .finish()
    }
}
