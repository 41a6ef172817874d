use std::ops;

use derive_more::Constructor;

use crate::Point;

#[derive(Copy, Clone, PartialEq, Debug, Default, Constructor)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Size::new(width, height)
    }
}

impl ops::Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Self::Output {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}
