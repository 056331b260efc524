use nalgebra::Vector3;

use super::types::{CollisionBackend, LayerMask, RayHit, RayQuery, RaycastError};

/// Cast `origins[i]` along `directions[i]` for every `i` as a single batch.
///
/// Returns one entry per input in input order; `None` means no hit within
/// `length` on a layer in `mask`. Empty input gives empty output.
pub fn batched_raycast<B>(
    backend: &B,
    origins: &[Vector3<f64>],
    directions: &[Vector3<f64>],
    length: f64,
    mask: LayerMask,
) -> Result<Vec<Option<RayHit>>, RaycastError>
where
    B: CollisionBackend + ?Sized,
{
    if origins.len() != directions.len() {
        tracing::warn!(
            origins = origins.len(),
            directions = directions.len(),
            "raycast batch rejected"
        );
        return Err(RaycastError::LengthMismatch {
            origins: origins.len(),
            directions: directions.len(),
        });
    }
    if length.is_nan() || length < 0.0 {
        return Err(RaycastError::InvalidLength(length));
    }

    let queries: Vec<RayQuery> = origins
        .iter()
        .zip(directions)
        .map(|(o, d)| RayQuery::new(*o, *d, length, mask))
        .collect();
    tracing::debug!(rays = queries.len(), mask = mask.0, length, "raycast batch");

    let hits = backend.cast_batch(&queries);
    if hits.len() != queries.len() {
        return Err(RaycastError::BackendMismatch {
            expected: queries.len(),
            got: hits.len(),
        });
    }
    Ok(hits)
}
