//! Tolerances and ambient physics constants.
//!
//! Policy
//! - Tolerances are fixed constants; physics constants travel in `PhysicsCfg`
//!   so trajectory sampling stays a pure function of its arguments.

use nalgebra::Vector3;

/// Smallest ray direction norm treated as a usable direction.
pub(crate) const DIR_EPS: f64 = 1e-12;
/// Parallel-ray threshold for plane intersection (`|n·d|` below this misses).
pub(crate) const PARALLEL_EPS: f64 = 1e-12;

/// Physics constants consumed by trajectory sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsCfg {
    /// Constant acceleration applied every tick.
    pub gravity: Vector3<f64>,
    /// Fixed simulation tick length in seconds.
    pub fixed_dt: f64,
}

impl Default for PhysicsCfg {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, -9.81, 0.0),
            fixed_dt: 0.02,
        }
    }
}

impl PhysicsCfg {
    /// Effective step length for a caller-provided time multiplier.
    #[inline]
    pub fn step(&self, time_step: f64) -> f64 {
        self.fixed_dt * time_step
    }
}
