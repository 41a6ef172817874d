use std::{fmt, time::Instant};

use log::{debug, trace};

use crate::{AxisLock, GestureSession, PointerSample, SwipeConfig, sample::millis_between};

/// A swipe callback. Invoked synchronously from [`SwipeRecognizer::end`].
pub type SwipeCallback = Box<dyn FnMut()>;

/// The classification of a completed gesture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SwipeResult {
    #[default]
    None,
    /// The pointer moved right (`start.x < end.x`).
    SwipeLeft,
    /// The pointer moved left (`start.x > end.x`).
    SwipeRight,
}

/// The result of feeding a move sample to the recognizer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The input event that produced the sample should not scroll or select natively.
    pub suppress_default: bool,
}

/// Recognizes horizontal swipes from a sequence of pointer samples.
///
/// `Idle -> Active -> Idle`. A [`start`](Self::start) while active replaces the current gesture
/// without classifying it.
pub struct SwipeRecognizer {
    config: SwipeConfig,
    session: GestureSession,
    on_swipe_left: Option<SwipeCallback>,
    on_swipe_right: Option<SwipeCallback>,
}

impl fmt::Debug for SwipeRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRecognizer")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("on_swipe_left", &self.on_swipe_left.is_some())
            .field("on_swipe_right", &self.on_swipe_right.is_some())
            .finish()
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeRecognizer {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            session: GestureSession::default(),
            on_swipe_left: None,
            on_swipe_right: None,
        }
    }

    pub fn with_on_swipe_left(mut self, callback: impl FnMut() + 'static) -> Self {
        self.set_on_swipe_left(callback);
        self
    }

    pub fn with_on_swipe_right(mut self, callback: impl FnMut() + 'static) -> Self {
        self.set_on_swipe_right(callback);
        self
    }

    pub fn set_on_swipe_left(&mut self, callback: impl FnMut() + 'static) {
        self.on_swipe_left = Some(Box::new(callback));
    }

    pub fn set_on_swipe_right(&mut self, callback: impl FnMut() + 'static) {
        self.on_swipe_right = Some(Box::new(callback));
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// Begins a new gesture. An unfinished gesture is dropped without firing a callback.
    pub fn start(&mut self, sample: PointerSample) {
        if self.session.active {
            debug!("Gesture restarted, previous gesture dropped");
        }
        trace!("Gesture started at {:?}", sample.pos);
        self.session = GestureSession::begin(sample);
    }

    /// Feeds a move sample. Does nothing if no gesture is active.
    pub fn move_to(&mut self, sample: PointerSample) -> MoveOutcome {
        let session = &mut self.session;
        if !session.active {
            return MoveOutcome::default();
        }

        let diff = (session.start - sample.pos).abs();

        if !session.axis_lock.is_locked()
            && let Some(axis_lock) = AxisLock::resolve(diff)
        {
            debug!("Axis locked: {axis_lock} (dx: {}, dy: {})", diff.x, diff.y);
            session.axis_lock = axis_lock;
        }

        if let Some(last_time) = session.last_time {
            let delta_x = sample.pos.x - session.last_x;
            let delta_time = millis_between(last_time, sample.time);
            if delta_time > 0.0 {
                session.velocity = delta_x.abs() / delta_time;
            }
        }

        session.last_x = sample.pos.x;
        session.last_time = Some(sample.time);
        trace!(
            "Gesture moved to {:?}, velocity: {}",
            sample.pos, session.velocity
        );

        MoveOutcome {
            suppress_default: self.config.suppress_default_scroll
                && session.axis_lock.is_horizontal()
                && diff.x > SwipeConfig::SUPPRESS_SCROLL_DISTANCE,
        }
    }

    /// Ends the current gesture at `x`, classifies it and fires the matching callback.
    ///
    /// Returns [`SwipeResult::None`] if no gesture is active. The session is neutral afterwards.
    pub fn end(&mut self, x: f64, time: Instant) -> SwipeResult {
        if !self.session.active {
            return SwipeResult::None;
        }

        let swipe_distance = self.session.start.x - x;
        let swipe_time = self
            .session
            .start_time
            .map(|start_time| millis_between(start_time, time))
            .unwrap_or_default();
        let velocity = if swipe_time > 0.0 {
            swipe_distance.abs() / swipe_time
        } else {
            0.0
        };

        let result = if self.session.axis_lock.is_horizontal() {
            self.classify(swipe_distance, velocity)
        } else {
            SwipeResult::None
        };
        debug!(
            "Gesture ended: {result:?} (axis: {}, distance: {swipe_distance}, velocity: {velocity})",
            self.session.axis_lock
        );

        self.fire(result);
        self.session = GestureSession::default();
        result
    }

    /// Drops the current gesture without classifying it.
    pub fn abandon(&mut self) {
        if self.session.active {
            debug!("Gesture abandoned");
        }
        self.session = GestureSession::default();
    }

    fn classify(&self, swipe_distance: f64, velocity: f64) -> SwipeResult {
        let should_swipe = swipe_distance.abs() > self.config.distance_threshold
            || velocity > self.config.velocity_threshold;

        if !should_swipe {
            return SwipeResult::None;
        }

        // Leftward pointer motion maps to `SwipeRight`.
        if swipe_distance > 0.0 {
            SwipeResult::SwipeRight
        } else if swipe_distance < 0.0 {
            SwipeResult::SwipeLeft
        } else {
            SwipeResult::None
        }
    }

    fn fire(&mut self, result: SwipeResult) {
        let callback = match result {
            SwipeResult::None => None,
            SwipeResult::SwipeLeft => self.on_swipe_left.as_mut(),
            SwipeResult::SwipeRight => self.on_swipe_right.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }
    }

    /// `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.session.active
    }

    /// The most recent instantaneous speed in units per millisecond.
    pub fn velocity(&self) -> f64 {
        self.session.velocity
    }

    pub fn axis_lock(&self) -> AxisLock {
        self.session.axis_lock
    }

    pub fn is_horizontal_swipe(&self) -> bool {
        self.session.axis_lock.is_horizontal()
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }
}
