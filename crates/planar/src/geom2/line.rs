//! Unbounded lines through two anchor points.
//!
//! Purpose
//! - Keep the two anchors as the only stored state; slope and intercepts are
//!   derived on demand, so moving an anchor can never leave stale values.
//! - Report vertical lines with slope `+∞` (never `-∞`) so that parallelism
//!   is plain slope equality.
//!
//! Code cross-refs: `Point`, `Vector`, `cfg::approx_eq`

use std::fmt;
use std::ops::{Add, Sub};

use super::{Point, Vector};
use crate::cfg::approx_eq;
use crate::error::{GeomError, GeomResult};

/// Which anchor [`Line::to_origin_with`] moves onto the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    First,
    Second,
}

/// Infinite line through `p1` and `p2`.
///
/// Invariant: `p1 != p2` (under [`Point`] equality), checked by every
/// constructor and anchor setter.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    p1: Point,
    p2: Point,
}

const SAME_POINTS: &str = "cannot create a line with two same points";

impl Line {
    /// Line through two distinct points.
    pub fn new(p1: Point, p2: Point) -> GeomResult<Self> {
        if p1 == p2 {
            return Err(GeomError::InvalidArgument(SAME_POINTS));
        }
        Ok(Self { p1, p2 })
    }

    /// Line through the origin and `point`; `point` must not be the origin.
    pub fn through_origin(point: Point) -> GeomResult<Self> {
        Self::new(Point::origin(), point)
    }

    /// Line through `(x1, y1)` and `(x2, y2)`.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> GeomResult<Self> {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// `y = slope·x + intercept`, anchored at `x = 0` and `x = 1`.
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Self {
        Self {
            p1: Point::new(0.0, intercept),
            p2: Point::new(1.0, slope + intercept),
        }
    }

    /// The X axis.
    pub fn horizontal() -> Self {
        Self {
            p1: Point::origin(),
            p2: Point::new(1.0, 0.0),
        }
    }

    /// The Y axis.
    pub fn vertical() -> Self {
        Self {
            p1: Point::origin(),
            p2: Point::new(0.0, 1.0),
        }
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Replace the first anchor; fails if it would coincide with `p2`.
    pub fn set_p1(&mut self, p1: Point) -> GeomResult<()> {
        if p1 == self.p2 {
            return Err(GeomError::InvalidArgument(SAME_POINTS));
        }
        self.p1 = p1;
        Ok(())
    }

    /// Replace the second anchor; fails if it would coincide with `p1`.
    pub fn set_p2(&mut self, p2: Point) -> GeomResult<()> {
        if p2 == self.p1 {
            return Err(GeomError::InvalidArgument(SAME_POINTS));
        }
        self.p2 = p2;
        Ok(())
    }

    /// Direction `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Vector {
        Vector::from(self.p2 - self.p1)
    }

    /// Slope of the line; vertical lines report `+∞`.
    pub fn slope(&self) -> f64 {
        let p = self.to_origin().p2;
        let slope = p.y() / p.x();
        if slope == f64::NEG_INFINITY {
            f64::INFINITY
        } else {
            slope
        }
    }

    /// Y coordinate where the line crosses the Y axis.
    ///
    /// A vertical line off the Y axis never crosses it: `-∞` right of the
    /// axis, `+∞` left of it. The Y axis itself reports `0`.
    pub fn y_intercept(&self) -> f64 {
        if self.is_vertical() {
            return sided_infinity(self.p1.x());
        }
        self.p1.y() - self.slope() * self.p1.x()
    }

    /// X coordinate where the line crosses the X axis.
    ///
    /// A horizontal line off the X axis never crosses it: `-∞` above the
    /// axis, `+∞` below it. The X axis itself reports `0`.
    pub fn x_intercept(&self) -> f64 {
        if self.is_horizontal() {
            return sided_infinity(self.p1.y());
        }
        if self.is_vertical() {
            return self.p1.x();
        }
        -self.y_intercept() / self.slope()
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.slope() == 0.0
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.slope() == f64::INFINITY
    }

    /// Equal slopes (two vertical lines are parallel).
    #[inline]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.slope() == other.slope()
    }

    pub fn is_perpendicular_to(&self, other: &Line) -> bool {
        if (self.is_horizontal() && other.is_vertical())
            || (self.is_vertical() && other.is_horizontal())
        {
            return true;
        }
        self.slope() * other.slope() == -1.0
    }

    /// Whether `p` lies on the line, within point tolerance.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_vertical() {
            return approx_eq(p.x(), self.p1.x());
        }
        self.point_at_x(p.x()).is_some_and(|on_line| on_line == p)
    }

    /// Point of the line at abscissa `x`; `None` for vertical lines.
    pub fn point_at_x(&self, x: f64) -> Option<Point> {
        if self.is_vertical() {
            return None;
        }
        if self.is_horizontal() {
            return Some(Point::new(x, self.p1.y()));
        }
        Some(Point::new(x, self.slope() * x + self.y_intercept()))
    }

    /// Point of the line at ordinate `y`; `None` for horizontal lines.
    pub fn point_at_y(&self, y: f64) -> Option<Point> {
        if self.is_horizontal() {
            return None;
        }
        if self.is_vertical() {
            return Some(Point::new(self.p1.x(), y));
        }
        Some(Point::new((y - self.y_intercept()) / self.slope(), y))
    }

    /// Crossing point of two lines.
    ///
    /// `None` for parallel lines, including coincident ones: a coincident
    /// pair is not distinguished from a parallel pair.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        if self.is_parallel_to(other) {
            tracing::debug!(line = %self, other = %other, "parallel lines have no intersection");
            return None;
        }
        // Slope-intercept form is undefined for a vertical line; evaluate the
        // other line at its abscissa instead.
        if self.is_vertical() {
            return other.point_at_x(self.p1.x());
        }
        if other.is_vertical() {
            return self.point_at_x(other.p1.x());
        }
        let x = (other.y_intercept() - self.y_intercept()) / (self.slope() - other.slope());
        self.point_at_x(x)
    }

    /// Shorthand for `to_origin_with(Anchor::First, false)`.
    #[inline]
    pub fn to_origin(&self) -> Line {
        self.to_origin_with(Anchor::First, false)
    }

    /// Translate the line so that `anchor` sits at `(0, 0)`.
    ///
    /// With `normalize`, both resulting anchors are scaled to unit length;
    /// the anchor on the origin stays there.
    pub fn to_origin_with(&self, anchor: Anchor, normalize: bool) -> Line {
        let shift = match anchor {
            Anchor::First => Vector::from(self.p1),
            Anchor::Second => Vector::from(self.p2),
        };
        // The chosen anchor lands exactly on the origin and the other keeps
        // its offset, so the anchors stay apart.
        let mut moved = Line {
            p1: self.p1 - shift,
            p2: self.p2 - shift,
        };
        if normalize {
            moved.p1.normalize();
            moved.p2.normalize();
        }
        moved
    }

    /// Line through `point` with the same direction as `self`.
    ///
    /// Fails if the direction vanishes next to `point`'s magnitude.
    pub fn parallel_through(&self, point: Point) -> GeomResult<Line> {
        Line::new(point, point + self.direction())
    }

    /// Intercept used for equality: the abscissa for vertical lines, the
    /// Y intercept otherwise.
    fn axis_intercept(&self) -> f64 {
        if self.is_vertical() {
            self.p1.x()
        } else {
            self.y_intercept()
        }
    }
}

fn sided_infinity(offset: f64) -> f64 {
    if offset == 0.0 {
        0.0
    } else if offset > 0.0 {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// Same infinite line, regardless of which anchors describe it.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.slope(), other.slope())
            && approx_eq(self.axis_intercept(), other.axis_intercept())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}--{}-", self.p1, self.p2)
    }
}

/// Translate both anchors; fails if rounding collapses them onto one point.
impl Add<Vector> for Line {
    type Output = GeomResult<Line>;
    #[inline]
    fn add(self, v: Vector) -> GeomResult<Line> {
        Line::new(self.p1 + v, self.p2 + v)
    }
}
/// Translate both anchors by `-v`; fails if rounding collapses them.
impl Sub<Vector> for Line {
    type Output = GeomResult<Line>;
    #[inline]
    fn sub(self, v: Vector) -> GeomResult<Line> {
        Line::new(self.p1 - v, self.p2 - v)
    }
}
