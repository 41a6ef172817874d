//! Geometry primitives in logical screen units.

mod point;
mod rect;
mod size;

pub use point::*;
pub use rect::*;
pub use size::*;

pub trait Contains<Other> {
    fn contains(&self, other: Other) -> bool;
}
