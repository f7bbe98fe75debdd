//! Curated API surface.
//!
//! Groups the public types by concern so callers can import from one place.
//! Prefer these re-exports over deep module paths.

// Angles & tolerances
pub use crate::angle::{convert_angle, AngleUnit};
pub use crate::cfg::{approx_eq, round_to, EQ_EPS, ROUND_DIGITS};
// Errors
pub use crate::error::{GeomError, GeomResult};
// 2D geometry
pub use crate::geom2::{Anchor, Circle, Figure2D, Line, Point, Position, Vector};
// 1D ranges
pub use crate::boundary::{Boundary, Unbounded};
pub use crate::interval::Interval;
// Sets
pub use crate::set::{CheckedStep, Numeric, Set, SetElement, Summable};
