//! Aggregates over sets of numbers, points and vectors.
//!
//! - `Summable`: element types with an additive identity and a mean.
//! - `Numeric`: ordered summable scalars (`min`, `max`, `range`, `from_range`).
//!
//! Empty-set policy differs on purpose: `min`/`max`/`range` fail with
//! `GeomError::EmptySet`, while `average` divides by a zero count and
//! returns NaN.

use std::cmp::Ordering;
use std::ops::Sub;

use num_traits::{One, Zero};

use super::{Set, SetElement};
use crate::error::{GeomError, GeomResult};
use crate::geom2::{Point, Vector};

/// Values that can be accumulated and averaged.
pub trait Summable: SetElement + Copy {
    /// Result type of [`Set::average`].
    type Mean;

    fn additive_zero() -> Self;
    fn plus(self, rhs: Self) -> Self;
    /// `total / count`; a zero count yields NaN components.
    fn mean(total: Self, count: usize) -> Self::Mean;
}

/// Addition that reports leaving the representable range.
pub trait CheckedStep: Sized {
    /// `self + step`, or `None` when an integer sum would overflow.
    /// Floats never fail here.
    fn checked_step(self, step: Self) -> Option<Self>;
}

/// Ordered scalar element types.
pub trait Numeric: Summable + CheckedStep + PartialOrd + Sub<Output = Self> + Zero + One {}

impl<T> Numeric for T where
    T: Summable + CheckedStep + PartialOrd + Sub<Output = T> + Zero + One
{
}

macro_rules! numeric_elements {
    ($($t:ty),*) => {$(
        impl SetElement for $t {
            #[inline]
            fn order(&self, other: &Self) -> Option<Ordering> {
                self.partial_cmp(other)
            }
        }
        impl Summable for $t {
            type Mean = f64;
            #[inline]
            fn additive_zero() -> Self {
                <$t as Zero>::zero()
            }
            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn mean(total: Self, count: usize) -> f64 {
                total as f64 / count as f64
            }
        }
    )*};
}
numeric_elements!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! checked_step_int {
    ($($t:ty),*) => {$(
        impl CheckedStep for $t {
            #[inline]
            fn checked_step(self, step: Self) -> Option<Self> {
                self.checked_add(step)
            }
        }
    )*};
}
checked_step_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! checked_step_float {
    ($($t:ty),*) => {$(
        impl CheckedStep for $t {
            #[inline]
            fn checked_step(self, step: Self) -> Option<Self> {
                Some(self + step)
            }
        }
    )*};
}
checked_step_float!(f32, f64);

impl Summable for Point {
    type Mean = Point;
    #[inline]
    fn additive_zero() -> Self {
        Point::origin()
    }
    #[inline]
    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }
    fn mean(total: Self, count: usize) -> Point {
        Point::from(total.coords() / count as f64)
    }
}

impl Summable for Vector {
    type Mean = Vector;
    #[inline]
    fn additive_zero() -> Self {
        Vector::zero()
    }
    #[inline]
    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }
    fn mean(total: Self, count: usize) -> Vector {
        Vector::from(total.coords() / count as f64)
    }
}

impl<T: Summable> Set<T> {
    /// Sum of all elements; the additive identity for an empty set.
    pub fn sum(&self) -> T {
        self.iter().fold(T::additive_zero(), |acc, &x| acc.plus(x))
    }

    /// `sum / count`. NaN (or NaN coordinates) for an empty set.
    pub fn average(&self) -> T::Mean {
        if self.is_empty() {
            tracing::debug!("average of an empty set is NaN");
        }
        T::mean(self.sum(), self.len())
    }
}

impl<T: Numeric> Set<T> {
    /// `{start, start + 1, ...}` up to and including `end` when reached.
    pub fn from_range(start: T, end: T) -> GeomResult<Set<T>> {
        Self::from_range_by(start, end, T::one())
    }

    /// `{start, start + step, start + 2·step, ...}` while `<= end`.
    ///
    /// `end` is included only when stepping lands on it exactly. Fails when
    /// `start > end` or `step <= 0`.
    pub fn from_range_by(start: T, end: T, step: T) -> GeomResult<Set<T>> {
        if start > end {
            tracing::debug!("rejected range: start exceeds end");
            return Err(GeomError::InvalidArgument("range start must not exceed its end"));
        }
        if !(step > T::zero()) {
            tracing::debug!("rejected range: non-positive step");
            return Err(GeomError::InvalidArgument("range step must be positive"));
        }
        let mut out = Set::new();
        let mut current = start;
        // Stepping yields strictly increasing values, so the vector stays sorted and unique.
        out.items.push(current);
        // Integer overflow past `T::MAX` ends the range like passing `end` does.
        while let Some(next) = current.checked_step(step) {
            if !(next > current) {
                return Err(GeomError::InvalidArgument("range step too small to advance"));
            }
            if next > end {
                break;
            }
            out.items.push(next);
            current = next;
        }
        Ok(out)
    }

    /// Smallest element.
    pub fn min(&self) -> GeomResult<T> {
        let mut it = self.iter().copied();
        let first = it
            .next()
            .ok_or(GeomError::EmptySet("cannot take the minimum of an empty set"))?;
        Ok(it.fold(first, |lo, x| if x < lo { x } else { lo }))
    }

    /// Largest element.
    pub fn max(&self) -> GeomResult<T> {
        let mut it = self.iter().copied();
        let first = it
            .next()
            .ok_or(GeomError::EmptySet("cannot take the maximum of an empty set"))?;
        Ok(it.fold(first, |hi, x| if x > hi { x } else { hi }))
    }

    /// `max - min`.
    pub fn range(&self) -> GeomResult<T> {
        Ok(self.max()? - self.min()?)
    }
}
