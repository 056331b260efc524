//! Point sampling, layout and ray queries for spawning and physics preview.
//!
//! Layout
//! - `sample`: circle/grid/lattice/trajectory point generators (pure, total).
//! - `raycast`: batched ray queries against a pluggable collision backend.
//! - `numeric`, `text`: small scalar and string helpers used by callers.
//!
//! API Policy
//! - Every function here is stateless. The only ambient inputs are physics
//!   constants, which callers pass explicitly through `PhysicsCfg`.

pub mod api;
pub mod cfg;
pub mod numeric;
pub mod raycast;
pub mod sample;
pub mod text;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::PhysicsCfg;
pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::PhysicsCfg;
    pub use crate::raycast::{
        batched_raycast, Collider, CollisionBackend, LayerMask, RayHit, RayQuery, RaycastError,
        Shape, ShapeWorld,
    };
    pub use crate::sample::{
        grid_points_between, grid_points_in_square, points_in_radius, uniform_circle_points,
        uniform_grid_points, velocity_trajectory_points,
    };
    pub use nalgebra::Vector3 as Vec3;
}
