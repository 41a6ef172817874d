//! Touch input.
//!
//! winit reports each finger separately. [`TouchTracker`] aggregates these into [`TouchInput`]s
//! that carry the list of all fingers currently down (oldest first) and the finger that changed.

use std::time::Instant;

use glide_geometry::Point;
use log::warn;
use winit::event::TouchPhase;

use crate::{EventDisposition, PointerSample, SwipeRecognizer, SwipeResult};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    /// Logical coordinates.
    pub pos: Point,
}

/// One touch event with the state of all touches at that time.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchInput {
    pub phase: TouchPhase,
    /// All touches that are currently down, the oldest first. A lifted touch is not included.
    pub touches: Vec<TouchPoint>,
    /// The touches that changed with this event.
    pub changed_touches: Vec<TouchPoint>,
    pub time: Instant,
}

impl TouchInput {
    /// The sample of the first active touch.
    pub fn primary(&self) -> Option<PointerSample> {
        self.touches
            .first()
            .map(|touch| PointerSample::new(touch.pos, self.time))
    }

    /// The sample of the first changed touch.
    pub fn changed(&self) -> Option<PointerSample> {
        self.changed_touches
            .first()
            .map(|touch| PointerSample::new(touch.pos, self.time))
    }
}

/// Aggregates per-finger touch events.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: Vec<TouchPoint>,
}

impl TouchTracker {
    pub fn update(&mut self, id: u64, phase: TouchPhase, pos: Point, time: Instant) -> TouchInput {
        let changed = TouchPoint { id, pos };
        match phase {
            TouchPhase::Started => {
                // A repeated start of the same id replaces it.
                self.active.retain(|touch| touch.id != id);
                self.active.push(changed);
            }
            TouchPhase::Moved => match self.active.iter_mut().find(|touch| touch.id == id) {
                Some(touch) => touch.pos = pos,
                None => warn!("Move of an unknown touch {id}"),
            },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.retain(|touch| touch.id != id);
            }
        }

        TouchInput {
            phase,
            touches: self.active.clone(),
            changed_touches: vec![changed],
            time,
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

/// The touch adapter of the [`SwipeRecognizer`].
pub trait TouchHandlers {
    fn touch_start(&mut self, input: &TouchInput);

    /// Returns [`EventDisposition::Consume`] while a horizontal drag should block native
    /// scrolling.
    fn touch_move(&mut self, input: &TouchInput) -> EventDisposition;

    fn touch_end(&mut self, input: &TouchInput) -> SwipeResult;

    /// The platform took the touch away.
    fn touch_cancel(&mut self);
}

impl TouchHandlers for SwipeRecognizer {
    fn touch_start(&mut self, input: &TouchInput) {
        match input.primary() {
            Some(sample) => self.start(sample),
            None => warn!("Touch start without an active touch"),
        }
    }

    fn touch_move(&mut self, input: &TouchInput) -> EventDisposition {
        let Some(sample) = input.primary() else {
            return EventDisposition::Pass;
        };
        if self.move_to(sample).suppress_default {
            EventDisposition::Consume
        } else {
            EventDisposition::Pass
        }
    }

    fn touch_end(&mut self, input: &TouchInput) -> SwipeResult {
        match input.changed() {
            Some(sample) => self.end(sample.pos.x, sample.time),
            None => {
                warn!("Touch end without a changed touch");
                SwipeResult::None
            }
        }
    }

    fn touch_cancel(&mut self) {
        self.abandon();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::AxisLock;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn tracker_orders_touches_by_arrival() {
        let t0 = Instant::now();
        let mut tracker = TouchTracker::default();

        tracker.update(7, TouchPhase::Started, Point::new(10.0, 10.0), t0);
        let input = tracker.update(3, TouchPhase::Started, Point::new(50.0, 50.0), t0);
        assert_eq!(input.touches.len(), 2);
        assert_eq!(input.primary().unwrap().pos, Point::new(10.0, 10.0));
        assert_eq!(input.changed().unwrap().pos, Point::new(50.0, 50.0));

        let input = tracker.update(7, TouchPhase::Moved, Point::new(20.0, 10.0), at(t0, 10));
        assert_eq!(input.primary().unwrap().pos, Point::new(20.0, 10.0));

        let input = tracker.update(7, TouchPhase::Ended, Point::new(25.0, 10.0), at(t0, 20));
        assert_eq!(input.touches, vec![TouchPoint {
            id: 3,
            pos: Point::new(50.0, 50.0)
        }]);
        assert_eq!(input.changed().unwrap().pos, Point::new(25.0, 10.0));

        let input = tracker.update(3, TouchPhase::Cancelled, Point::new(50.0, 50.0), at(t0, 30));
        assert!(input.touches.is_empty());
    }

    #[test]
    fn horizontal_drag_consumes_moves_and_swipes_on_release() {
        let t0 = Instant::now();
        let mut tracker = TouchTracker::default();
        let mut recognizer = SwipeRecognizer::default();

        let input = tracker.update(0, TouchPhase::Started, Point::new(200.0, 100.0), t0);
        recognizer.touch_start(&input);

        let input = tracker.update(0, TouchPhase::Moved, Point::new(188.0, 101.0), at(t0, 20));
        assert_eq!(recognizer.touch_move(&input), EventDisposition::Pass);
        assert_eq!(recognizer.axis_lock(), AxisLock::Horizontal);

        let input = tracker.update(0, TouchPhase::Moved, Point::new(170.0, 101.0), at(t0, 50));
        assert_eq!(recognizer.touch_move(&input), EventDisposition::Consume);

        // The lifted touch is only in the changed list.
        let input = tracker.update(0, TouchPhase::Ended, Point::new(140.0, 101.0), at(t0, 100));
        assert!(input.touches.is_empty());
        assert_eq!(recognizer.touch_end(&input), SwipeResult::SwipeRight);
        assert!(!recognizer.is_dragging());
    }

    #[test]
    fn vertical_drag_passes_through() {
        let t0 = Instant::now();
        let mut tracker = TouchTracker::default();
        let mut recognizer = SwipeRecognizer::default();

        let input = tracker.update(0, TouchPhase::Started, Point::new(100.0, 100.0), t0);
        recognizer.touch_start(&input);
        for (ms, y) in [(10, 120.0), (20, 160.0), (30, 240.0)] {
            let input = tracker.update(0, TouchPhase::Moved, Point::new(104.0, y), at(t0, ms));
            assert_eq!(recognizer.touch_move(&input), EventDisposition::Pass);
        }
        assert_eq!(recognizer.axis_lock(), AxisLock::Vertical);

        let input = tracker.update(0, TouchPhase::Ended, Point::new(104.0, 260.0), at(t0, 40));
        assert_eq!(recognizer.touch_end(&input), SwipeResult::None);
    }

    #[test]
    fn cancelled_touch_fires_nothing() {
        let t0 = Instant::now();
        let mut tracker = TouchTracker::default();
        let mut recognizer = SwipeRecognizer::default();

        let input = tracker.update(0, TouchPhase::Started, Point::new(200.0, 100.0), t0);
        recognizer.touch_start(&input);
        let input = tracker.update(0, TouchPhase::Moved, Point::new(100.0, 100.0), at(t0, 20));
        recognizer.touch_move(&input);
        recognizer.touch_cancel();

        assert!(recognizer.session().is_neutral());
    }

    #[test]
    fn malformed_inputs_are_ignored() {
        let t0 = Instant::now();
        let mut recognizer = SwipeRecognizer::default();
        let empty = TouchInput {
            phase: TouchPhase::Started,
            touches: Vec::new(),
            changed_touches: Vec::new(),
            time: t0,
        };

        recognizer.touch_start(&empty);
        assert!(!recognizer.is_dragging());
        assert_eq!(recognizer.touch_move(&empty), EventDisposition::Pass);
        assert_eq!(recognizer.touch_end(&empty), SwipeResult::None);
    }
}
