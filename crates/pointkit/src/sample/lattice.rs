//! Integer-lattice helpers in the XZ plane.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use nalgebra::Vector3;

use crate::numeric::round_to_int;

/// Every lattice point of the rectangle spanned by `start` and `end` (inclusive), y = 0.
///
/// Order: x outer, z inner. x walks from `start.x` towards `end.x`; z walks
/// from `end.z` back towards `start.z`. Extents use rounded coordinate
/// differences, so non-integer inputs keep their fractional offsets.
pub fn grid_points_between(start: Vector3<f64>, end: Vector3<f64>) -> Vec<Vector3<f64>> {
    let len_x = round_to_int(start.x - end.x).unsigned_abs() + 1;
    let len_z = round_to_int(start.z - end.z).unsigned_abs() + 1;
    let step_x = if start.x - end.x < 0.0 { 1.0 } else { -1.0 };
    let step_z = if start.z - end.z < 0.0 { -1.0 } else { 1.0 };
    let mut out = Vec::with_capacity((len_x * len_z) as usize);
    for x in 0..len_x {
        for z in 0..len_z {
            out.push(Vector3::new(
                start.x + step_x * x as f64,
                0.0,
                end.z + step_z * z as f64,
            ));
        }
    }
    out
}

/// Unique lattice points within `radius` of `center` (XZ distance), y = 0.
///
/// - `edges_only` keeps the outer ring `radius - 1 <= d <= radius`.
/// - `offset_center` shifts results by `(0.5, 0, 0.5)` to address cell centres.
///
/// The scan starts at the rounded centre minus `radius` and ends at the last
/// lattice coordinate within the unrounded centre plus `radius`. Centres whose
/// scan range does not fit in `i64` (including non-finite ones) give an empty set.
/// Callers should treat the result as a set; it is returned sorted by (x, z).
pub fn points_in_radius(
    center: Vector3<f64>,
    radius: u32,
    offset_center: bool,
    edges_only: bool,
) -> Vec<Vector3<f64>> {
    let r = f64::from(radius);
    let (Some(xs), Some(zs)) = (scan_range(center.x, radius), scan_range(center.z, radius)) else {
        return Vec::new();
    };
    let mut cells: BTreeSet<(i64, i64)> = BTreeSet::new();
    for j in xs {
        for k in zs.clone() {
            let dx = j as f64 - center.x;
            let dz = k as f64 - center.z;
            let d = (dx * dx + dz * dz).sqrt();
            if d <= r && (!edges_only || d >= r - 1.0) {
                cells.insert((j, k));
            }
        }
    }
    let off = if offset_center { 0.5 } else { 0.0 };
    cells
        .into_iter()
        .map(|(j, k)| Vector3::new(j as f64 + off, 0.0, k as f64 + off))
        .collect()
}

/// `round(c) - radius ..= floor(c + radius)`, or `None` if it leaves `i64`.
fn scan_range(c: f64, radius: u32) -> Option<RangeInclusive<i64>> {
    // 2^63; i64::MAX itself is not representable as f64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !c.is_finite() {
        return None;
    }
    let hi = (c + f64::from(radius)).floor();
    if !(-LIMIT..LIMIT).contains(&hi) || !(-LIMIT..LIMIT).contains(&c.round_ties_even()) {
        return None;
    }
    let lo = round_to_int(c).checked_sub(i64::from(radius))?;
    Some(lo..=hi as i64)
}

/// Square block of lattice offsets `[-length/2, length/2]²` around `center`, at `center.y`.
///
/// Halving is integer (`length = 4` and `length = 5` both give a 5×5 block).
/// Order: x outer, z inner.
pub fn grid_points_in_square(center: Vector3<f64>, length: u32) -> Vec<Vector3<f64>> {
    let half = i64::from(length / 2);
    let side = (2 * half + 1) as usize;
    let mut out: Vec<Vector3<f64>> = Vec::with_capacity(side * side);
    for x in -half..=half {
        for z in -half..=half {
            out.push(Vector3::new(
                center.x + x as f64,
                center.y,
                center.z + z as f64,
            ));
        }
    }
    out
}
