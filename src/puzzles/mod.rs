//! Stateless puzzle and utility functions.
//!
//! Pure functions over primitive inputs, grouped by domain. None of them
//! carry state or fail; edge cases are part of each function's contract and
//! documented on the function itself.

pub mod geometry;
pub mod grid;
pub mod numbers;
pub mod strings;

pub use geometry::{Bounds, Circle, Point, Rectangle};
pub use grid::Mark;
