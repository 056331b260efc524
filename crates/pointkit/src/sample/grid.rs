use nalgebra::Vector3;

use crate::numeric::round_to_int;

/// Lay out `count` points in a near-square grid centred on `center`.
///
/// Layout
/// - `columns = round(sqrt(count))`, so non-square counts can leave a partial
///   last row (e.g. 3 points → 2 columns, rows of 2 and 1).
/// - Row-major: x grows by `spacing`, each new row steps y down by `spacing`.
/// - Recentering uses `columns` and the number of *completed* rows only, which
///   leaves a partial last row off-centre. Callers rely on this exact layout.
pub fn uniform_grid_points(count: usize, spacing: f64, center: Vector3<f64>) -> Vec<Vector3<f64>> {
    if count == 0 {
        return Vec::new();
    }
    // count >= 1 implies columns >= 1
    let columns = round_to_int((count as f64).sqrt()).max(1) as usize;
    let mut points = Vec::with_capacity(count);
    let mut rows = 0usize;
    let (mut x, mut y) = (0.0, 0.0);
    for i in 0..count {
        points.push(Vector3::new(x, y, 0.0) + center);
        x += spacing;
        if (i + 1) % columns == 0 {
            x = 0.0;
            y -= spacing;
            rows += 1;
        }
    }
    let shift = Vector3::new(
        (0.5 - columns as f64 / 2.0) * spacing,
        (-0.5 + rows as f64 / 2.0) * spacing,
        0.0,
    );
    for p in &mut points {
        *p += shift;
    }
    points
}
