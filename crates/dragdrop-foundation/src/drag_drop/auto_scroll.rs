//! Auto-scroll job tracking.
//!
//! Auto-scroll runs as a scroll animation in the rendering layer,
//! asynchronously to drag events. The drag side only needs to know whether the
//! last scroll is still running and to stop it when the drag ends.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoScrollJobState {
    Active,
    Completed,
    Cancelled,
}

/// Shared handle on one programmatic scroll.
///
/// The rendering layer creates the job in
/// [`LazyListLayoutSource::scroll_by`](crate::lazy::LazyListLayoutSource::scroll_by)
/// and completes it when the scroll has been applied. Clones share state, so
/// the drag side can cancel a job the rendering layer is still animating.
#[derive(Clone, Debug)]
pub struct AutoScrollJob {
    state: Rc<Cell<AutoScrollJobState>>,
    delta: f32,
}

impl AutoScrollJob {
    /// A running job that scrolls by `delta`.
    pub fn new(delta: f32) -> Self {
        Self {
            state: Rc::new(Cell::new(AutoScrollJobState::Active)),
            delta,
        }
    }

    /// A job that already finished, for rendering layers that scroll
    /// synchronously.
    pub fn completed(delta: f32) -> Self {
        let job = Self::new(delta);
        job.complete();
        job
    }

    /// Requested scroll distance.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn state(&self) -> AutoScrollJobState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state.get() == AutoScrollJobState::Active
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.get() == AutoScrollJobState::Cancelled
    }

    /// Marks the scroll as applied. Has no effect on a cancelled job.
    pub fn complete(&self) {
        if self.is_active() {
            self.state.set(AutoScrollJobState::Completed);
        }
    }

    /// Stops the job. Has no effect on a job that already completed.
    pub fn cancel(&self) {
        if self.is_active() {
            self.state.set(AutoScrollJobState::Cancelled);
        }
    }
}

/// Holds at most one outstanding auto-scroll job.
///
/// Launching while the previous job is active is refused, so scroll requests
/// issued on consecutive drag events never stack up into a faster scroll.
#[derive(Debug, Default)]
pub struct AutoScrollSlot {
    job: Option<AutoScrollJob>,
}

impl AutoScrollSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a job is still running.
    pub fn is_busy(&self) -> bool {
        self.job.as_ref().is_some_and(AutoScrollJob::is_active)
    }

    /// The most recent job, running or not.
    pub fn current(&self) -> Option<&AutoScrollJob> {
        self.job.as_ref()
    }

    /// Starts a job unless one is running. Returns whether `launch` was called.
    pub fn launch(&mut self, launch: impl FnOnce() -> AutoScrollJob) -> bool {
        if self.is_busy() {
            return false;
        }
        self.job = Some(launch());
        true
    }

    /// Cancels the running job, if any, and forgets it.
    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            if job.is_active() {
                log::debug!("cancelling auto-scroll job of {}", job.delta());
            }
            job.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_lifecycle() {
        let job = AutoScrollJob::new(12.0);
        assert!(job.is_active());
        assert_eq!(job.delta(), 12.0);
        job.complete();
        assert_eq!(job.state(), AutoScrollJobState::Completed);
        job.cancel();
        assert_eq!(job.state(), AutoScrollJobState::Completed);
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let job = AutoScrollJob::new(-8.0);
        let renderer_side = job.clone();
        job.cancel();
        assert!(renderer_side.is_cancelled());
        renderer_side.complete();
        assert!(renderer_side.is_cancelled());
    }

    #[test]
    fn slot_refuses_second_job_while_first_runs() {
        let mut slot = AutoScrollSlot::new();
        assert!(slot.launch(|| AutoScrollJob::new(10.0)));
        assert!(slot.is_busy());
        assert!(!slot.launch(|| panic!("must not launch while busy")));

        if let Some(job) = slot.current() {
            job.complete();
        }
        assert!(!slot.is_busy());
        assert!(slot.launch(|| AutoScrollJob::new(5.0)));
        assert_eq!(slot.current().map(AutoScrollJob::delta), Some(5.0));
    }

    #[test]
    fn slot_cancel_stops_running_job() {
        let mut slot = AutoScrollSlot::new();
        let job = AutoScrollJob::new(10.0);
        let handle = job.clone();
        slot.launch(move || job);
        slot.cancel();
        assert!(handle.is_cancelled());
        assert!(slot.current().is_none());
        assert!(!slot.is_busy());
    }

    #[test]
    fn completed_constructor_is_not_active() {
        let job = AutoScrollJob::completed(3.0);
        assert!(!job.is_active());
        assert!(!job.is_cancelled());
    }
}
