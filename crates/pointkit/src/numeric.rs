//! Scalar and vector helpers.
//!
//! Rounding follows the engine convention used across the samplers: ties go
//! to the even neighbour (`2.5 → 2`, `3.5 → 4`).

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Round to the nearest integer, ties to even.
#[inline]
pub fn round_to_int(x: f64) -> i64 {
    x.round_ties_even() as i64
}

/// Position of `v` between `a` and `b`, clamped to `[0, 1]`. Returns 0 if `a == b`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    ((v - a) / (b - a)).clamp(0.0, 1.0)
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Map `v` from `[from_min, from_max]` onto `[to_min, to_max]` (clamped).
#[inline]
pub fn remap(v: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    lerp(to_min, to_max, inverse_lerp(from_min, from_max, v))
}

/// Most decimal places `rounded_vector` honours.
pub const MAX_ROUND_DECIMALS: u32 = 15;

/// Round each component to `decimals` places (ties to even), capped at 15 places.
pub fn rounded_vector(v: Vector3<f64>, decimals: u32) -> Vector3<f64> {
    let scale = 10f64.powi(decimals.min(MAX_ROUND_DECIMALS) as i32);
    v.map(|c| (c * scale).round_ties_even() / scale)
}

/// True once every `n` frames (`frame % n == 0`). Never fires for `n == 0`.
#[inline]
pub fn every_n_frames(frame: u64, n: u32) -> bool {
    n != 0 && frame % u64::from(n) == 0
}

/// Reproducible in-place shuffle.
pub fn shuffle_seeded<T>(items: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Local scale that yields `global` under a parent with lossy scale `parent_lossy`.
///
/// Returns `None` if any parent component is zero (no local scale can reach the target).
pub fn local_scale_for_global(
    global: Vector3<f64>,
    parent_lossy: Vector3<f64>,
) -> Option<Vector3<f64>> {
    if parent_lossy.iter().any(|c| *c == 0.0) {
        return None;
    }
    Some(global.component_div(&parent_lossy))
}
