//! Error taxonomy shared by all value types.
//!
//! Failures are synchronous and raised where the violation happens
//! (constructor, mutator or an operation with an undefined result).
//! Degenerate-but-defined results are not errors: they surface as `None`
//! (line queries) or NaN (`Set::average` on an empty set).

use thiserror::Error;

/// Errors raised by geometric and set operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// A constructor or mutator argument would break a type invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operation has no defined result for the given operands.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// An aggregate was requested from a set without elements.
    #[error("empty set: {0}")]
    EmptySet(&'static str),

    /// A point or vector was divided by a zero scalar.
    #[error("attempted to divide by zero")]
    DivisionByZero,
}

/// Result type for fallible geometry operations.
pub type GeomResult<T> = Result<T, GeomError>;
