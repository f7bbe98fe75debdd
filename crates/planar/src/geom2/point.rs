//! Locations in the plane.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector2;

use super::util::{normalized_or_self, theta_of};
use super::Vector;
use crate::cfg::approx_eq;
use crate::error::{GeomError, GeomResult};

/// A 2D location.
///
/// Equality is per coordinate within [`crate::cfg::EQ_EPS`], so `Point` is
/// `PartialEq` only (the relation is not transitive).
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    coords: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    /// The point at `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self {
            coords: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.y
    }
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.coords.x = x;
    }
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.coords.y = y;
    }

    /// Coordinates as a column vector.
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        self.coords
    }

    /// Euclidean distance to `(0, 0)`.
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.coords.norm()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.coords - other.coords).norm()
    }

    /// Taxicab (Manhattan) distance to `(0, 0)`.
    #[inline]
    pub fn grid_dist_from_origin(&self) -> f64 {
        self.coords.lp_norm(1)
    }

    /// Taxicab (Manhattan) distance to `other`.
    #[inline]
    pub fn grid_dist(&self, other: Point) -> f64 {
        (self.coords - other.coords).lp_norm(1)
    }

    /// Angle of the position vector from the positive X axis, in `[0, 2π)`.
    #[inline]
    pub fn theta(&self) -> f64 {
        theta_of(self.coords)
    }

    /// Scaled copy at distance 1 from the origin; the origin maps to itself.
    #[inline]
    pub fn to_normalized(&self) -> Point {
        Point::from(normalized_or_self(self.coords))
    }

    /// In-place form of [`Point::to_normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        self.coords = normalized_or_self(self.coords);
    }

    /// Division by a scalar; fails on `scalar == 0`.
    pub fn checked_div(self, scalar: f64) -> GeomResult<Point> {
        if scalar == 0.0 {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Point::from(self.coords / scalar))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x(), other.x()) && approx_eq(self.y(), other.y())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(coords: Vector2<f64>) -> Self {
        Self { coords }
    }
}
impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.coords
    }
}
impl From<Vector> for Point {
    #[inline]
    fn from(v: Vector) -> Self {
        Point::from(v.coords())
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::from(self.coords + rhs.coords)
    }
}
impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::from(self.coords + rhs.coords())
    }
}
impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::from(self.coords - rhs.coords)
    }
}
impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::from(self.coords - rhs.coords())
    }
}
impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::from(-self.coords)
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, scalar: f64) -> Point {
        Point::from(self.coords * scalar)
    }
}
impl Div<f64> for Point {
    type Output = GeomResult<Point>;
    #[inline]
    fn div(self, scalar: f64) -> GeomResult<Point> {
        self.checked_div(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn euclidean_and_grid_distances() {
        assert_eq!(Point::new(3.0, 4.0).distance_from_origin(), 5.0);
        assert_eq!(Point::new(-3.0, -4.0).distance_from_origin(), 5.0);
        assert_eq!(Point::new(2.0, 6.0).distance(Point::new(6.0, 9.0)), 5.0);
        assert_eq!(Point::new(3.0, -2.0).distance(Point::new(-1.0, 1.0)), 5.0);
        assert_eq!(Point::new(-3.0, -6.0).grid_dist_from_origin(), 9.0);
        assert_eq!(Point::new(3.0, 4.0).grid_dist(Point::new(-1.0, -1.0)), 9.0);
        let p = Point::new(7.0, 2.0);
        assert_eq!(p.grid_dist_from_origin(), p.grid_dist(Point::origin()));
    }

    #[test]
    fn theta_covers_all_quadrants() {
        let cases = [
            (3.0, 0.0, 0.0),
            (2.5, 2.5, PI * 0.25),
            (0.0, 3.0, PI * 0.5),
            (-3.0, 0.0, PI),
            (0.0, -3.0, PI * 1.5),
        ];
        for (x, y, expected) in cases {
            assert!((Point::new(x, y).theta() - expected).abs() < 1e-12, "({x}, {y})");
        }
    }

    #[test]
    fn arithmetic() {
        let p = Point::new(2.0, 4.0);
        let q = Point::new(5.0, 3.0);
        assert_eq!(p + q - q, p);
        assert_eq!(p + Point::origin(), p);
        assert_eq!(-Point::new(5.5, -2.0), Point::new(-5.5, 2.0));
        assert_eq!(-Point::origin(), Point::origin());
        assert_eq!(Point::new(2.0, 5.0) * -3.0, Point::new(-6.0, -15.0));
        assert_eq!(Point::new(2.0, 5.0) * 0.0, Point::origin());
        assert_eq!((Point::new(20.0, 15.0) / -5.0).unwrap(), Point::new(-4.0, -3.0));
        assert_eq!(Point::new(20.0, 15.0) / 0.0, Err(GeomError::DivisionByZero));
        let v = Vector::new(1.5, -2.0);
        assert_eq!(p - v + v, p);
    }

    #[test]
    fn normalize_matches_to_normalized() {
        assert_eq!(Point::new(4.0, 3.0).to_normalized(), Point::new(0.8, 0.6));
        assert_eq!(Point::new(0.0, 1.0).to_normalized(), Point::new(0.0, 1.0));
        assert_eq!(Point::origin().to_normalized(), Point::origin());
        let mut p = Point::new(4.0, 7.0);
        let q = p.to_normalized();
        p.normalize();
        assert_eq!(p, q);
    }

    #[test]
    fn equality_tolerance_and_display() {
        assert_eq!(Point::new(6.0, -8.0), Point::new(6.0 + 1e-7, -8.0));
        assert_ne!(Point::new(6.0, -8.0), Point::new(7.0, -8.0));
        assert_eq!(Point::new(1.0, 2.5).to_string(), "(1, 2.5)");
        assert_eq!(Point::from((1.0, 2.5)), Point::new(1.0, 2.5));
        assert_eq!(Point::from(Vector::new(-5.2, 0.0)), Point::new(-5.2, 0.0));
    }
}
