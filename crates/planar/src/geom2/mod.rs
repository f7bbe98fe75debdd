//! 2D value types: points, vectors, lines and circles.
//!
//! Purpose
//! - Small, copyable value types over `nalgebra::Vector2<f64>` storage.
//! - Tolerant equality everywhere (`cfg::EQ_EPS`), exact predicates where a
//!   degenerate case must be recognized exactly (vertical slope, zero length).
//!
//! Code cross-refs: `Point`, `Vector`, `Line`, `Circle`, `Figure2D`

mod circle;
mod figure;
mod line;
mod point;
mod util;
mod vector;

pub use circle::Circle;
pub use figure::{Figure2D, Position};
pub use line::{Anchor, Line};
pub use point::Point;
pub use vector::Vector;
