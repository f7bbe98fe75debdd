//! Numeric tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants rather than runtime options: every value type compares
//!   with the same absolute tolerance, so mixing types never mixes policies.
//! - Rotation output is rounded to a fixed number of decimals to suppress
//!   `sin`/`cos` noise such as `6.1e-17` in place of `0`.

/// Absolute tolerance for coordinate, radius, slope and intercept equality.
pub const EQ_EPS: f64 = 1e-6;
/// Decimal places kept by vector rotation.
pub const ROUND_DIGITS: i32 = 6;

/// `true` when `a` and `b` differ by less than [`EQ_EPS`].
///
/// Identical values compare equal first so that matching infinities
/// (`inf - inf` is NaN) are still treated as equal.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < EQ_EPS
}

/// Round to `digits` decimals, ties to even.
#[inline]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}
