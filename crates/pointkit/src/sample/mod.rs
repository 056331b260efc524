//! Point-set generators for spawning, layout and physics preview.
//!
//! Purpose
//! - Produce deterministic point sets (circle, grid, lattice, trajectory)
//!   that callers consume immediately. No state, no errors: degenerate
//!   inputs (`count == 0`, `radius == 0`) give empty or single-point sets.
//!
//! Conventions
//! - Circle and grid layouts live in the XY plane (z taken from `center`).
//! - Lattice helpers live in the XZ plane with integer x/z coordinates.
//! - Rounding is ties-to-even throughout (`numeric::round_to_int`).

mod circle;
mod grid;
mod lattice;
mod trajectory;

pub use circle::uniform_circle_points;
pub use grid::uniform_grid_points;
pub use lattice::{grid_points_between, grid_points_in_square, points_in_radius};
pub use trajectory::velocity_trajectory_points;
