//! Curated surface for callers (UNSTABLE).
//!
//! Flat re-exports of everything a spawning or preview system typically
//! reaches for. Module paths stay available for the full set.

// Samplers
pub use crate::sample::{
    grid_points_between, grid_points_in_square, points_in_radius, uniform_circle_points,
    uniform_grid_points, velocity_trajectory_points,
};
// Ray queries
pub use crate::raycast::{
    batched_raycast, Collider, ColliderId, CollisionBackend, LayerMask, RayHit, RayQuery,
    RaycastError, Shape, ShapeWorld,
};
// Config
pub use crate::cfg::PhysicsCfg;
// Helpers
pub use crate::numeric::{
    every_n_frames, inverse_lerp, lerp, local_scale_for_global, remap, round_to_int,
    rounded_vector, shuffle_seeded,
};
pub use crate::text::{big_number_notation, format_grouped, substring_before, title_case};
