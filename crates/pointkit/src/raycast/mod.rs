//! Batched ray queries against a pluggable collision backend.
//!
//! Purpose
//! - Turn paired origin/direction slices into one batch of `RayQuery`s,
//!   hand the batch to a `CollisionBackend`, and return exactly one
//!   `Option<RayHit>` per input, in input order.
//!
//! Backends
//! - The embedding environment implements `CollisionBackend` over its own
//!   physics scene and may override `cast_batch` with its own scheduler.
//! - `ShapeWorld` is a small analytic backend (spheres, planes, boxes); with
//!   the `parallel` feature its batches fan out over `rayon`.

mod batch;
mod shapes;
mod types;

pub use batch::batched_raycast;
pub use shapes::{Collider, Shape, ShapeWorld};
pub use types::{ColliderId, CollisionBackend, LayerMask, RayHit, RayQuery, RaycastError};
