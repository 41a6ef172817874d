use std::time::Instant;

use derive_more::Constructor;
use glide_geometry::Point;

/// A pointer position at a point in time. Both touch and mouse input are normalized into samples
/// before they reach the recognizer.
#[derive(Debug, Copy, Clone, PartialEq, Constructor)]
pub struct PointerSample {
    /// Logical coordinates.
    pub pos: Point,
    pub time: Instant,
}

impl PointerSample {
    pub fn at(x: f64, y: f64, time: Instant) -> Self {
        Self::new(Point::new(x, y), time)
    }
}

/// Milliseconds from `earlier` to `later`. Zero if `later` is not after `earlier`.
pub(crate) fn millis_between(earlier: Instant, later: Instant) -> f64 {
    later.saturating_duration_since(earlier).as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn millis_saturate_on_reordered_instants() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(250);
        assert_eq!(millis_between(t0, t1), 250.0);
        assert_eq!(millis_between(t1, t0), 0.0);
        assert_eq!(millis_between(t0, t0), 0.0);
    }
}
