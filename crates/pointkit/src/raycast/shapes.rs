//! Analytic collision shapes and the `ShapeWorld` backend.
//!
//! Rays that start inside a sphere or box, or behind a plane, do not hit it.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use nalgebra::Vector3;

use super::types::{ColliderId, CollisionBackend, RayHit, RayQuery};
use crate::cfg::{DIR_EPS, PARALLEL_EPS};

/// Collision primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { center: Vector3<f64>, radius: f64 },
    /// Half-space boundary `normal · x = offset`; the front side is `normal · x > offset`.
    Plane { normal: Vector3<f64>, offset: f64 },
    /// Axis-aligned box.
    Aabb { min: Vector3<f64>, max: Vector3<f64> },
}

impl Shape {
    /// Ray parameter and outward normal of the first entry point, if any.
    ///
    /// `dir` must be unit length.
    pub fn cast_ray(&self, origin: Vector3<f64>, dir: Vector3<f64>) -> Option<(f64, Vector3<f64>)> {
        match *self {
            Shape::Sphere { center, radius } => {
                if !(radius > 0.0) {
                    return None;
                }
                let oc = origin - center;
                let c = oc.dot(&oc) - radius * radius;
                if c < 0.0 {
                    return None;
                }
                let b = oc.dot(&dir);
                let disc = b * b - c;
                if disc < 0.0 {
                    return None;
                }
                let t = -b - disc.sqrt();
                if t < 0.0 {
                    return None;
                }
                let normal = (origin + dir * t - center) / radius;
                Some((t, normal))
            }
            Shape::Plane { normal, offset } => {
                let len = normal.norm();
                if !(len > DIR_EPS) {
                    return None;
                }
                let n = normal / len;
                let denom = n.dot(&dir);
                if denom > -PARALLEL_EPS {
                    return None;
                }
                let dist = n.dot(&origin) - offset / len;
                if dist < 0.0 {
                    return None;
                }
                Some((-dist / denom, n))
            }
            Shape::Aabb { min, max } => {
                let mut t_enter = f64::NEG_INFINITY;
                let mut t_exit = f64::INFINITY;
                let mut enter_axis = 0usize;
                for axis in 0..3 {
                    let o = origin[axis];
                    let d = dir[axis];
                    if d.abs() < PARALLEL_EPS {
                        if o < min[axis] || o > max[axis] {
                            return None;
                        }
                        continue;
                    }
                    let mut t1 = (min[axis] - o) / d;
                    let mut t2 = (max[axis] - o) / d;
                    if t1 > t2 {
                        std::mem::swap(&mut t1, &mut t2);
                    }
                    if t1 > t_enter {
                        t_enter = t1;
                        enter_axis = axis;
                    }
                    t_exit = t_exit.min(t2);
                }
                if t_enter > t_exit || t_enter < 0.0 {
                    return None;
                }
                let mut normal = Vector3::zeros();
                normal[enter_axis] = -dir[enter_axis].signum();
                Some((t_enter, normal))
            }
        }
    }
}

/// A shape tagged with its layer (0..32).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    pub shape: Shape,
    pub layer: u8,
}

/// Flat list of colliders; queries test all of them and keep the nearest hit.
#[derive(Clone, Debug, Default)]
pub struct ShapeWorld {
    colliders: Vec<Collider>,
}

impl ShapeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colliders(colliders: Vec<Collider>) -> Self {
        Self { colliders }
    }

    /// Add a collider and return its id.
    pub fn add(&mut self, collider: Collider) -> ColliderId {
        self.colliders.push(collider);
        ColliderId(self.colliders.len() - 1)
    }

    #[inline]
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl CollisionBackend for ShapeWorld {
    fn cast(&self, query: &RayQuery) -> Option<RayHit> {
        if query.is_degenerate() {
            return None;
        }
        let mut best: Option<RayHit> = None;
        for (i, collider) in self.colliders.iter().enumerate() {
            if !query.mask.contains_layer(collider.layer) {
                continue;
            }
            let Some((t, normal)) = collider.shape.cast_ray(query.origin, query.direction) else {
                continue;
            };
            if t > query.max_distance {
                continue;
            }
            if best.map_or(true, |b| t < b.distance) {
                best = Some(RayHit {
                    point: query.point_at(t),
                    normal,
                    distance: t,
                    collider: ColliderId(i),
                });
            }
        }
        best
    }

    #[cfg(feature = "parallel")]
    fn cast_batch(&self, queries: &[RayQuery]) -> Vec<Option<RayHit>> {
        queries.par_iter().map(|q| self.cast(q)).collect()
    }
}
