//! Circles given by center and radius.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Sub};

use super::{Figure2D, Point, Position, Vector};
use crate::angle::{to_radians, AngleUnit};
use crate::cfg::approx_eq;
use crate::error::{GeomError, GeomResult};

/// Circle with `center` and `radius`.
///
/// Invariant: `radius > 0` and not NaN, checked on construction and by
/// every radius/diameter setter.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    center: Point,
    radius: f64,
}

fn check_radius(radius: f64) -> GeomResult<f64> {
    if radius.is_nan() || radius <= 0.0 {
        return Err(GeomError::InvalidArgument("radius must be positive"));
    }
    Ok(radius)
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> GeomResult<Self> {
        Ok(Self {
            center,
            radius: check_radius(radius)?,
        })
    }

    /// Circle of `radius` centered on the origin.
    pub fn with_radius(radius: f64) -> GeomResult<Self> {
        Self::new(Point::origin(), radius)
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> GeomResult<()> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Sets `radius = diameter / 2`, under the radius invariant.
    pub fn set_diameter(&mut self, diameter: f64) -> GeomResult<()> {
        self.set_radius(diameter / 2.0)
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        self.radius * TAU
    }

    /// Point on the circle at `angle`, counterclockwise from the positive X axis.
    ///
    /// Uses the unrounded unit direction: rounding it as [`Vector::from_angle`]
    /// does would be scaled up by the radius.
    pub fn point_at_angle(&self, angle: f64, unit: AngleUnit) -> Point {
        let (sin, cos) = to_radians(angle, unit).sin_cos();
        self.center + Vector::new(cos, sin) * self.radius
    }

    /// Copy with the radius changed by `delta`; fails if the result is not positive.
    pub fn grown_by(&self, delta: f64) -> GeomResult<Circle> {
        Circle::new(self.center, self.radius + delta)
    }
}

impl Figure2D for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        self.circumference()
    }

    fn distance(&self, p: Point) -> f64 {
        p.distance(self.center) - self.radius
    }
}

impl Circle {
    /// Inherent shorthand for [`Figure2D::area`].
    #[inline]
    pub fn area(&self) -> f64 {
        Figure2D::area(self)
    }
    /// Inherent shorthand for [`Figure2D::distance`].
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        Figure2D::distance(self, p)
    }
    /// Inherent shorthand for [`Figure2D::locate`].
    #[inline]
    pub fn locate(&self, p: Point) -> Position {
        Figure2D::locate(self, p)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && approx_eq(self.radius, other.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}) : {}", self.radius, self.center)
    }
}

impl Add<Vector> for Circle {
    type Output = Circle;
    #[inline]
    fn add(self, v: Vector) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}
impl Sub<Vector> for Circle {
    type Output = Circle;
    #[inline]
    fn sub(self, v: Vector) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}
/// Grow the radius; the result is re-validated.
impl Add<f64> for Circle {
    type Output = GeomResult<Circle>;
    #[inline]
    fn add(self, delta: f64) -> GeomResult<Circle> {
        self.grown_by(delta)
    }
}
/// Shrink the radius; the result is re-validated.
impl Sub<f64> for Circle {
    type Output = GeomResult<Circle>;
    #[inline]
    fn sub(self, delta: f64) -> GeomResult<Circle> {
        self.grown_by(-delta)
    }
}
