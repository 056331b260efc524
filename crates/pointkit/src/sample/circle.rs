use nalgebra::Vector3;

/// `count` points evenly spaced by angle on a circle of `radius` around `center`.
///
/// Point `i` sits at angle `2π·i/count`, starting at angle 0 on the +x axis and
/// turning towards +y. `count == 0` yields an empty set.
pub fn uniform_circle_points(count: usize, radius: f64, center: Vector3<f64>) -> Vec<Vector3<f64>> {
    if count == 0 {
        return Vec::new();
    }
    let delta = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            let th = delta * i as f64;
            center + Vector3::new(th.cos(), th.sin(), 0.0) * radius
        })
        .collect()
}
