use nalgebra::Vector3;

use crate::cfg::PhysicsCfg;

/// Sample a ballistic path with semi-implicit Euler.
///
/// Each sample records the current position, then advances
/// `v += g·h` and `p += v·h` with `h = physics.fixed_dt · time_step`.
/// Large `time_step` values drift from the analytic parabola; that is accepted.
pub fn velocity_trajectory_points(
    start: Vector3<f64>,
    velocity: Vector3<f64>,
    point_amount: usize,
    time_step: f64,
    physics: &PhysicsCfg,
) -> Vec<Vector3<f64>> {
    let h = physics.step(time_step);
    let mut pos = start;
    let mut vel = velocity;
    let mut points = Vec::with_capacity(point_amount);
    for _ in 0..point_amount {
        points.push(pos);
        vel += physics.gravity * h;
        pos += vel * h;
    }
    points
}
