//! Planar geometry primitives and generic sets.
//!
//! Layout
//! - `geom2`: points, vectors, lines and circles in the Euclidean plane.
//! - `boundary`, `interval`: one-dimensional ranges over `f64`.
//! - `set`: unique-value sets with algebra and numeric aggregates.
//! - `angle`, `cfg`, `error`: unit conversion, tolerances, failure kinds.
//!
//! All values are plain in-memory data; nothing here does I/O or blocks.
//!
//! API Policy
//! - `api` and `prelude` are the curated import surfaces. Module paths may move.

pub mod angle;
pub mod api;
pub mod boundary;
pub mod cfg;
pub mod error;
pub mod geom2;
pub mod interval;
pub mod set;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::{convert_angle, AngleUnit};
pub use error::{GeomError, GeomResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{convert_angle, AngleUnit};
    pub use crate::boundary::Boundary;
    pub use crate::error::{GeomError, GeomResult};
    pub use crate::geom2::{Anchor, Circle, Figure2D, Line, Point, Position, Vector};
    pub use crate::interval::Interval;
    pub use crate::set::{Numeric, Set, SetElement, Summable};
}
