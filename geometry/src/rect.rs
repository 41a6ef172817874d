use crate::{Contains, Point, Size};

/// A sorted rectangle. The left and top edges are inclusive, the right and bottom edges are not.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub fn new(origin: impl Into<Point>, size: impl Into<Size>) -> Self {
        (origin.into(), size.into()).into()
    }

    #[must_use]
    pub fn from_size(size: impl Into<Size>) -> Self {
        (Point::default(), size.into()).into()
    }
}

impl From<(Point, Size)> for Rect {
    fn from((origin, size): (Point, Size)) -> Self {
        let end = origin + size;
        Self {
            left: origin.x,
            top: origin.y,
            right: end.x,
            bottom: end.y,
        }
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}
