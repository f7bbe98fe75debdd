//! Shared surface of closed figures.

use super::Point;
use crate::cfg::EQ_EPS;

/// Position of a point relative to a figure's boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Outside,
    On,
    Inside,
}

/// A bounded 2D figure that encloses area.
pub trait Figure2D {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;

    /// Signed distance from the boundary: positive outside, negative inside.
    fn distance(&self, p: Point) -> f64;

    /// Classify `p` by the sign of [`Figure2D::distance`]; distances within
    /// [`EQ_EPS`] of zero count as on the boundary.
    fn locate(&self, p: Point) -> Position {
        let d = self.distance(p);
        if d.abs() < EQ_EPS {
            Position::On
        } else if d > 0.0 {
            Position::Outside
        } else {
            Position::Inside
        }
    }
}
