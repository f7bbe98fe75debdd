//! Range endpoints with open/closed semantics.
//!
//! - `Boundary<T>`: one endpoint of a bounded range.
//! - `Unbounded`: which values count as "at infinity" and therefore may only
//!   sit behind an open endpoint.
//!
//! Code cross-refs: `interval::Interval`

use std::fmt;

use crate::error::{GeomError, GeomResult};
use crate::geom2::{Point, Vector};

/// Values that may lie at infinity.
pub trait Unbounded {
    /// `true` for numeric infinities; composite values are unbounded when
    /// any coordinate is.
    fn is_unbounded(&self) -> bool;
}

impl Unbounded for f64 {
    #[inline]
    fn is_unbounded(&self) -> bool {
        self.is_infinite()
    }
}
impl Unbounded for f32 {
    #[inline]
    fn is_unbounded(&self) -> bool {
        self.is_infinite()
    }
}
impl Unbounded for Point {
    #[inline]
    fn is_unbounded(&self) -> bool {
        self.x().is_infinite() || self.y().is_infinite()
    }
}
impl Unbounded for Vector {
    #[inline]
    fn is_unbounded(&self) -> bool {
        self.x().is_infinite() || self.y().is_infinite()
    }
}

macro_rules! bounded_integers {
    ($($t:ty),*) => {$(
        impl Unbounded for $t {
            #[inline]
            fn is_unbounded(&self) -> bool {
                false
            }
        }
    )*};
}
bounded_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// One endpoint of a range.
///
/// Invariant: a closed boundary never holds an unbounded value. Open
/// boundaries may, which is how half-infinite ranges are expressed.
///
/// Equality compares value and closedness; use [`Boundary::matches`] (or
/// `boundary == value` for the concrete value types) to compare the value only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary<T> {
    value: T,
    closed: bool,
}

impl<T: Unbounded> Boundary<T> {
    pub fn new(value: T, closed: bool) -> GeomResult<Self> {
        if closed && value.is_unbounded() {
            return Err(GeomError::InvalidArgument(
                "boundary cannot be closed while having an infinite value",
            ));
        }
        Ok(Self { value, closed })
    }

    /// Closed boundary at `value`; fails for infinite values.
    #[inline]
    pub fn closed(value: T) -> GeomResult<Self> {
        Self::new(value, true)
    }
}

impl<T> Boundary<T> {
    /// Open boundary at `value`. Never fails.
    #[inline]
    pub fn open(value: T) -> Self {
        Self {
            value,
            closed: false,
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Value equality, ignoring closedness.
    #[inline]
    pub fn matches(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.value == *value
    }
}

impl<T: fmt::Display> fmt::Display for Boundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

macro_rules! bare_value_conversions {
    ($($t:ty),*) => {$(
        /// A bare value converts to a closed boundary.
        impl TryFrom<$t> for Boundary<$t> {
            type Error = GeomError;
            #[inline]
            fn try_from(value: $t) -> GeomResult<Self> {
                Self::closed(value)
            }
        }
        impl PartialEq<$t> for Boundary<$t> {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.matches(other)
            }
        }
    )*};
}
bare_value_conversions!(f64, f32, Point, Vector);
