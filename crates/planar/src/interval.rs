//! Continuous numeric ranges.

use std::fmt;

use crate::boundary::Boundary;
use crate::error::GeomResult;

/// Numbers between two [`Boundary`] endpoints.
///
/// Endpoint order is not normalized: with `start > end` nothing is contained.
/// Equality is structural (same endpoints), not "same set of numbers".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    start: Boundary<f64>,
    end: Boundary<f64>,
}

impl Interval {
    #[inline]
    pub fn new(start: Boundary<f64>, end: Boundary<f64>) -> Self {
        Self { start, end }
    }

    /// `[start, end]`; fails if either end is infinite.
    pub fn closed(start: f64, end: f64) -> GeomResult<Self> {
        Ok(Self::new(Boundary::closed(start)?, Boundary::closed(end)?))
    }

    /// Endpoints with explicit closedness.
    pub fn with_closedness(
        start: f64,
        end: f64,
        start_closed: bool,
        end_closed: bool,
    ) -> GeomResult<Self> {
        Ok(Self::new(
            Boundary::new(start, start_closed)?,
            Boundary::new(end, end_closed)?,
        ))
    }

    #[inline]
    pub fn start(&self) -> Boundary<f64> {
        self.start
    }
    #[inline]
    pub fn end(&self) -> Boundary<f64> {
        self.end
    }
    #[inline]
    pub fn set_start(&mut self, start: Boundary<f64>) {
        self.start = start;
    }
    #[inline]
    pub fn set_end(&mut self, end: Boundary<f64>) {
        self.end = end;
    }

    pub fn contains(&self, number: f64) -> bool {
        let start = self.start.into_value();
        let end = self.end.into_value();
        let after_start = if self.start.is_closed() {
            number >= start
        } else {
            number > start
        };
        let before_end = if self.end.is_closed() {
            number <= end
        } else {
            number < end
        };
        after_start && before_end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.start.is_closed() { '[' } else { '(' };
        let close = if self.end.is_closed() { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.start, self.end)
    }
}
