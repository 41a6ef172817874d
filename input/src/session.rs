use std::time::Instant;

use glide_geometry::Point;

use crate::{AxisLock, PointerSample};

/// The transient state of one gesture.
///
/// The default value is the neutral state of an idle recognizer.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct GestureSession {
    /// Where the gesture started.
    pub start: Point,
    pub start_time: Option<Instant>,
    /// The x coordinate of the most recent sample.
    pub last_x: f64,
    pub last_time: Option<Instant>,
    pub axis_lock: AxisLock,
    /// The most recent instantaneous speed in units per millisecond.
    pub velocity: f64,
    pub active: bool,
}

impl GestureSession {
    pub fn begin(sample: PointerSample) -> Self {
        Self {
            start: sample.pos,
            start_time: Some(sample.time),
            last_x: sample.pos.x,
            last_time: Some(sample.time),
            axis_lock: AxisLock::Undetermined,
            velocity: 0.0,
            active: true,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}
