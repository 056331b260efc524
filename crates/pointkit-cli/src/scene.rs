//! JSON scene files for the built-in `ShapeWorld` backend.
//!
//! ```json
//! { "colliders": [
//!     { "shape": "plane",  "normal": [0, 1, 0], "offset": 0, "layer": 9 },
//!     { "shape": "sphere", "center": [0, 3, 0], "radius": 1 },
//!     { "shape": "aabb",   "min": [4, 0, -1], "max": [6, 2, 1], "layer": 11 }
//! ] }
//! ```

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use pointkit::raycast::{Collider, Shape, ShapeWorld};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
enum ColliderSpec {
    Sphere {
        center: [f64; 3],
        radius: f64,
        #[serde(default)]
        layer: u8,
    },
    Plane {
        normal: [f64; 3],
        offset: f64,
        #[serde(default)]
        layer: u8,
    },
    Aabb {
        min: [f64; 3],
        max: [f64; 3],
        #[serde(default)]
        layer: u8,
    },
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    colliders: Vec<ColliderSpec>,
}

impl ColliderSpec {
    fn into_collider(self) -> Result<Collider> {
        let (shape, layer) = match self {
            ColliderSpec::Sphere {
                center,
                radius,
                layer,
            } => (
                Shape::Sphere {
                    center: Vector3::from(center),
                    radius,
                },
                layer,
            ),
            ColliderSpec::Plane {
                normal,
                offset,
                layer,
            } => (
                Shape::Plane {
                    normal: Vector3::from(normal),
                    offset,
                },
                layer,
            ),
            ColliderSpec::Aabb { min, max, layer } => (
                Shape::Aabb {
                    min: Vector3::from(min),
                    max: Vector3::from(max),
                },
                layer,
            ),
        };
        if layer >= 32 {
            bail!("collider layer {layer} out of range 0..32");
        }
        Ok(Collider { shape, layer })
    }
}

/// Parse a scene document.
pub fn parse_scene(text: &str) -> Result<ShapeWorld> {
    let file: SceneFile = serde_json::from_str(text).context("parsing scene json")?;
    let colliders = file
        .colliders
        .into_iter()
        .enumerate()
        .map(|(i, spec)| spec.into_collider().with_context(|| format!("collider #{i}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(ShapeWorld::with_colliders(colliders))
}

pub fn load_scene(path: &Path) -> Result<ShapeWorld> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scene {}", path.display()))?;
    parse_scene(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_shapes() {
        let world = parse_scene(
            r#"{ "colliders": [
                { "shape": "plane", "normal": [0, 1, 0], "offset": 0, "layer": 9 },
                { "shape": "sphere", "center": [0, 3, 0], "radius": 1 },
                { "shape": "aabb", "min": [4, 0, -1], "max": [6, 2, 1], "layer": 11 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(world.len(), 3);
        assert_eq!(world.colliders()[0].layer, 9);
        assert_eq!(world.colliders()[1].layer, 0);
        assert!(matches!(
            world.colliders()[2].shape,
            Shape::Aabb { .. }
        ));
    }

    #[test]
    fn rejects_bad_layers_and_shapes() {
        assert!(parse_scene(
            r#"{ "colliders": [ { "shape": "sphere", "center": [0,0,0], "radius": 1, "layer": 40 } ] }"#
        )
        .is_err());
        assert!(parse_scene(r#"{ "colliders": [ { "shape": "cone" } ] }"#).is_err());
    }
}
