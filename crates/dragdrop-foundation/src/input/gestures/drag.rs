//! Long-press drag recogniser.
//!
//! Turns a stream of [`PointerEvent`]s into drag callbacks, but only after the
//! pointer has been held still for the long press timeout. Moving farther than
//! the touch slop before that abandons the gesture so the list can scroll
//! normally.

use dragdrop_ui_graphics::Point;
use smallvec::{smallvec, SmallVec};
use web_time::{Duration, Instant};

use crate::gesture_constants::{DRAG_THRESHOLD, LONG_PRESS_TIMEOUT};
use crate::input::types::{PointerEvent, PointerEventKind, PointerId};

/// Drag callbacks produced by [`DragGestureDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragGestureEvent {
    /// The long press fired; the position is where the pointer was held.
    Start(Point),
    /// Pointer movement since the previous event.
    Drag(Point),
    /// The pointer was released after the drag started.
    End,
    /// The platform cancelled the pointer after the drag started.
    Cancel,
}

/// Up to two events come out of a single pointer event (start + first drag).
pub type DragGestureEvents = SmallVec<[DragGestureEvent; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DetectorState {
    Idle,
    Pressed {
        pointer: PointerId,
        down_position: Point,
        deadline: Instant,
        last_position: Point,
    },
    Dragging {
        pointer: PointerId,
        last_position: Point,
    },
}

#[derive(Clone, Debug)]
pub struct DragGestureDetector {
    state: DetectorState,
    long_press_timeout: Duration,
    touch_slop: f32,
}

impl Default for DragGestureDetector {
    fn default() -> Self {
        Self::new(LONG_PRESS_TIMEOUT, DRAG_THRESHOLD)
    }
}

impl DragGestureDetector {
    pub fn new(long_press_timeout: Duration, touch_slop: f32) -> Self {
        Self {
            state: DetectorState::Idle,
            long_press_timeout,
            touch_slop,
        }
    }

    /// Whether a drag is in progress (the long press already fired).
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DetectorState::Dragging { .. })
    }

    /// Whether a press is being held and may still turn into a drag.
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, DetectorState::Pressed { .. })
    }

    pub fn reset(&mut self) {
        self.state = DetectorState::Idle;
    }

    /// Feeds one pointer event. Move events that belong to an active drag are
    /// consumed.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> DragGestureEvents {
        if !event.position.is_finite() {
            log::warn!("ignoring pointer {} event at {:?}", event.id, event.position);
            return SmallVec::new();
        }
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_release(event, DragGestureEvent::End),
            PointerEventKind::Cancel => self.on_release(event, DragGestureEvent::Cancel),
        }
    }

    /// Fires the long press when the pointer is held without moving.
    ///
    /// Platforms only deliver events on change, so the host calls this once
    /// per frame while a press is pending.
    pub fn poll(&mut self, now: Instant) -> Option<DragGestureEvent> {
        match self.state {
            DetectorState::Pressed {
                pointer,
                deadline,
                last_position,
                ..
            } if now >= deadline => {
                self.state = DetectorState::Dragging {
                    pointer,
                    last_position,
                };
                log::trace!("long press fired at {:?}", last_position);
                Some(DragGestureEvent::Start(last_position))
            }
            _ => None,
        }
    }

    /// Arms the detector. A second down from the pointer already being tracked
    /// means its release was lost: a running drag is ended first.
    fn on_down(&mut self, event: &PointerEvent) -> DragGestureEvents {
        if event.is_consumed() {
            return SmallVec::new();
        }
        let mut events = DragGestureEvents::new();
        match self.state {
            DetectorState::Idle => {}
            DetectorState::Pressed { pointer, .. } if pointer == event.id => {
                log::debug!("pointer {pointer} pressed again without release; re-arming");
            }
            DetectorState::Dragging { pointer, .. } if pointer == event.id => {
                log::debug!("pointer {pointer} pressed again while dragging; ending drag");
                events.push(DragGestureEvent::End);
            }
            _ => {
                // Second finger while a gesture is tracked; multi-touch is not supported.
                log::trace!("ignoring down of pointer {} during active gesture", event.id);
                return events;
            }
        }
        self.state = DetectorState::Pressed {
            pointer: event.id,
            down_position: event.position,
            deadline: event.uptime + self.long_press_timeout,
            last_position: event.position,
        };
        events
    }

    fn on_move(&mut self, event: &PointerEvent) -> DragGestureEvents {
        match self.state {
            DetectorState::Pressed {
                pointer,
                down_position,
                deadline,
                ..
            } if pointer == event.id => {
                if event.uptime >= deadline {
                    let mut events: DragGestureEvents =
                        self.poll(event.uptime).into_iter().collect();
                    events.extend(self.drag_to(event));
                    return events;
                }
                if (event.position - down_position).distance() > self.touch_slop {
                    log::trace!("pointer left touch slop before long press; abandoning");
                    self.state = DetectorState::Idle;
                } else if let DetectorState::Pressed { last_position, .. } = &mut self.state {
                    *last_position = event.position;
                }
                SmallVec::new()
            }
            DetectorState::Dragging { pointer, .. } if pointer == event.id => {
                self.drag_to(event).into_iter().collect()
            }
            _ => SmallVec::new(),
        }
    }

    fn drag_to(&mut self, event: &PointerEvent) -> Option<DragGestureEvent> {
        let DetectorState::Dragging {
            last_position,
            pointer,
        } = self.state
        else {
            return None;
        };
        event.consume();
        let delta = event.position - last_position;
        self.state = DetectorState::Dragging {
            pointer,
            last_position: event.position,
        };
        (delta != Point::ZERO).then_some(DragGestureEvent::Drag(delta))
    }

    fn on_release(
        &mut self,
        event: &PointerEvent,
        terminal: DragGestureEvent,
    ) -> DragGestureEvents {
        match self.state {
            DetectorState::Pressed { pointer, .. } if pointer == event.id => {
                // A press held past the deadline already counts as a long press
                // even if no frame polled it in time.
                let started = self.poll(event.uptime);
                self.state = DetectorState::Idle;
                match started {
                    Some(start) => smallvec![start, terminal],
                    None => SmallVec::new(),
                }
            }
            DetectorState::Dragging { pointer, .. } if pointer == event.id => {
                self.state = DetectorState::Idle;
                smallvec![terminal]
            }
            _ => SmallVec::new(),
        }
    }
}
