use derive_more::Display;
use glide_geometry::Vector;

/// Movement on either axis must exceed this before the axis of a gesture is decided.
pub const AXIS_LOCK_DEAD_ZONE: f64 = 10.0;

/// The per-gesture decision about the dominant axis. Once locked, it stays locked until the
/// gesture ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum AxisLock {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

impl AxisLock {
    /// Decides the axis for the absolute displacement `diff` from the start of the gesture.
    ///
    /// `None` while the displacement stays inside the dead-zone on both axes. Ties lock
    /// vertically.
    pub fn resolve(diff: Vector) -> Option<AxisLock> {
        if diff.x > AXIS_LOCK_DEAD_ZONE || diff.y > AXIS_LOCK_DEAD_ZONE {
            Some(if diff.x > diff.y {
                AxisLock::Horizontal
            } else {
                AxisLock::Vertical
            })
        } else {
            None
        }
    }

    pub fn is_locked(self) -> bool {
        self != AxisLock::Undetermined
    }

    pub fn is_horizontal(self) -> bool {
        self == AxisLock::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_zone_keeps_axis_undetermined() {
        for x in 0..=10 {
            for y in 0..=10 {
                let diff = Vector::new(x as f64, y as f64);
                assert_eq!(AxisLock::resolve(diff), None, "{diff:?}");
            }
        }
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(
            AxisLock::resolve(Vector::new(11.0, 3.0)),
            Some(AxisLock::Horizontal)
        );
        assert_eq!(
            AxisLock::resolve(Vector::new(3.0, 11.0)),
            Some(AxisLock::Vertical)
        );
        // Only one axis needs to leave the dead-zone, the comparison uses both.
        assert_eq!(
            AxisLock::resolve(Vector::new(10.5, 10.0)),
            Some(AxisLock::Horizontal)
        );
        assert_eq!(
            AxisLock::resolve(Vector::new(9.0, 10.5)),
            Some(AxisLock::Vertical)
        );
    }

    #[test]
    fn ties_lock_vertically() {
        assert_eq!(
            AxisLock::resolve(Vector::new(12.0, 12.0)),
            Some(AxisLock::Vertical)
        );
    }

    #[test]
    fn displays_variant_name() {
        assert_eq!(AxisLock::Horizontal.to_string(), "Horizontal");
        assert!(!AxisLock::Undetermined.is_locked());
        assert!(AxisLock::Vertical.is_locked());
    }
}
