//! Displacements and directions in the plane.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Rotation2, Vector2};

use super::util::{normalized_or_self, theta_of};
use super::Point;
use crate::angle::{convert_angle, to_radians, AngleUnit};
use crate::cfg::{approx_eq, round_to, ROUND_DIGITS};
use crate::error::{GeomError, GeomResult};

/// A 2D displacement.
///
/// Same representation as [`Point`], but adds direction-only operations
/// (dot product, rotation, angles between vectors).
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector {
    coords: Vector2<f64>,
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }
    /// `[0, 0]`
    #[inline]
    pub fn zero() -> Self {
        Self {
            coords: Vector2::zeros(),
        }
    }
    /// `[1, 0]`
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }
    /// `[0, 1]`
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Unit vector at `angle`, counterclockwise from `[1, 0]`.
    pub fn from_angle(angle: f64, unit: AngleUnit) -> Self {
        Self::unit_x().rotated_by(angle, unit)
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
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        self.coords
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.coords.norm()
    }

    /// Same as [`Vector::magnitude`].
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.magnitude()
    }

    /// Euclidean distance between the two vector tips.
    #[inline]
    pub fn distance(&self, other: Vector) -> f64 {
        (self.coords - other.coords).norm()
    }

    /// Direction angle from the positive X axis, in `[0, 2π)`.
    #[inline]
    pub fn theta(&self) -> f64 {
        theta_of(self.coords)
    }

    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.coords.dot(&other.coords)
    }

    /// Unsigned angle between `self` and `other`, in `unit`.
    ///
    /// Fails with [`GeomError::InvalidOperation`] if either vector has zero length.
    pub fn angle_between(&self, other: Vector, unit: AngleUnit) -> GeomResult<f64> {
        let magnitudes = self.magnitude() * other.magnitude();
        if magnitudes == 0.0 {
            return Err(GeomError::InvalidOperation(
                "cannot calculate angle with a zero vector",
            ));
        }
        // acos is undefined just outside [-1, 1]; rounding can land there for parallel inputs.
        let cos = (self.dot(other) / magnitudes).clamp(-1.0, 1.0);
        Ok(convert_angle(AngleUnit::Radians, cos.acos(), unit))
    }

    /// Counterclockwise rotation by `angle`; coordinates rounded to
    /// [`ROUND_DIGITS`] decimals.
    pub fn rotated_by(&self, angle: f64, unit: AngleUnit) -> Vector {
        let r = Rotation2::new(to_radians(angle, unit)) * self.coords;
        Vector::new(round_to(r.x, ROUND_DIGITS), round_to(r.y, ROUND_DIGITS))
    }

    /// In-place form of [`Vector::rotated_by`].
    pub fn rotate(&mut self, angle: f64, unit: AngleUnit) {
        *self = self.rotated_by(angle, unit);
    }

    /// Unit-length copy; the zero vector maps to itself.
    #[inline]
    pub fn to_normalized(&self) -> Vector {
        Vector::from(normalized_or_self(self.coords))
    }

    /// In-place form of [`Vector::to_normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        self.coords = normalized_or_self(self.coords);
    }

    /// Division by a scalar; fails on `scalar == 0`.
    pub fn checked_div(self, scalar: f64) -> GeomResult<Vector> {
        if scalar == 0.0 {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Vector::from(self.coords / scalar))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x(), other.x()) && approx_eq(self.y(), other.y())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x(), self.y())
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}
impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(coords: Vector2<f64>) -> Self {
        Self { coords }
    }
}
impl From<Vector> for Vector2<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        v.coords
    }
}
impl From<Point> for Vector {
    #[inline]
    fn from(p: Point) -> Self {
        Vector::from(p.coords())
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::from(self.coords + rhs.coords)
    }
}
impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::from(self.coords - rhs.coords)
    }
}
impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::from(-self.coords)
    }
}
impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, scalar: f64) -> Vector {
        Vector::from(self.coords * scalar)
    }
}
impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}
/// `v1 * v2` is the dot product.
impl Mul for Vector {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector) -> f64 {
        self.dot(rhs)
    }
}
impl Div<f64> for Vector {
    type Output = GeomResult<Vector>;
    #[inline]
    fn div(self, scalar: f64) -> GeomResult<Vector> {
        self.checked_div(scalar)
    }
}
