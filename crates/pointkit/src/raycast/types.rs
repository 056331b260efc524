use nalgebra::Vector3;

use crate::cfg::DIR_EPS;

/// 32-bit layer filter. Layer `l` passes when bit `l` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask with only `layer` set; out-of-range layers give an empty mask.
    #[inline]
    pub fn layer(layer: u8) -> Self {
        match 1u32.checked_shl(u32::from(layer)) {
            Some(bit) => LayerMask(bit),
            None => LayerMask::NONE,
        }
    }

    #[inline]
    pub fn contains_layer(self, layer: u8) -> bool {
        self.0 & LayerMask::layer(layer).0 != 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitor(self, rhs: LayerMask) -> Self::Output {
        LayerMask(self.0 | rhs.0)
    }
}

/// One prepared ray: unit direction (or zero if degenerate), max distance, filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayQuery {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
    pub max_distance: f64,
    pub mask: LayerMask,
}

impl RayQuery {
    /// Normalizes `direction`. Directions shorter than `DIR_EPS` become zero and never hit.
    pub fn new(
        origin: Vector3<f64>,
        direction: Vector3<f64>,
        max_distance: f64,
        mask: LayerMask,
    ) -> Self {
        let norm = direction.norm();
        let direction = if norm.is_finite() && norm > DIR_EPS {
            direction / norm
        } else {
            Vector3::zeros()
        };
        Self {
            origin,
            direction,
            max_distance,
            mask,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vector3::zeros()
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vector3<f64> {
        self.origin + self.direction * t
    }
}

/// Index of a collider inside its backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub usize);

/// Closest intersection of a ray with the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub distance: f64,
    pub collider: ColliderId,
}

/// Contract violations of a batched raycast call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RaycastError {
    #[error("origins ({origins}) and directions ({directions}) must pair up 1:1")]
    LengthMismatch { origins: usize, directions: usize },
    #[error("ray length must be non-negative, got {0}")]
    InvalidLength(f64),
    #[error("backend returned {got} results for {expected} queries")]
    BackendMismatch { expected: usize, got: usize },
}

/// Scene that answers ray queries.
pub trait CollisionBackend {
    /// Nearest hit within `query.max_distance` on a layer passing `query.mask`.
    fn cast(&self, query: &RayQuery) -> Option<RayHit>;

    /// Answer a whole batch; must return one entry per query, in order.
    fn cast_batch(&self, queries: &[RayQuery]) -> Vec<Option<RayHit>> {
        queries.iter().map(|q| self.cast(q)).collect()
    }
}
