use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector3;
use pointkit::raycast::{batched_raycast, LayerMask};
use pointkit::{sample, text, PhysicsCfg};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser, Debug)]
#[command(name = "pointkit")]
#[command(about = "Sample spawn/layout point sets and batched raycasts into CSV or Parquet")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Points evenly spaced on a circle (XY plane)
    Circle {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
        center: Vector3<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Near-square grid centred on a point (XY plane)
    Grid {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        spacing: f64,
        #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
        center: Vector3<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Lattice rectangle between two corners (XZ plane)
    Between {
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        start: Vector3<f64>,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        end: Vector3<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Lattice disc or ring around a point (XZ plane)
    Radius {
        #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
        center: Vector3<f64>,
        #[arg(long)]
        radius: u32,
        /// Shift results by (0.5, 0, 0.5) to address cell centres
        #[arg(long)]
        offset_center: bool,
        /// Keep only the outer ring
        #[arg(long)]
        edges_only: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Lattice square block around a point (XZ plane)
    Square {
        #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
        center: Vector3<f64>,
        #[arg(long)]
        length: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Projectile preview under constant gravity
    Trajectory {
        #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
        start: Vector3<f64>,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        velocity: Vector3<f64>,
        #[arg(long, default_value_t = 20)]
        points: usize,
        #[arg(long, default_value_t = 1.0)]
        time_step: f64,
        #[command(flatten)]
        physics: PhysicsArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Batched raycast of a CSV ray list against a JSON scene
    Raycast {
        /// CSV with columns ox,oy,oz,dx,dy,dz
        #[arg(long)]
        rays: PathBuf,
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        length: f64,
        /// Layer bitmask (default: all layers)
        #[arg(long, default_value_t = u32::MAX)]
        mask: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a value in compact counter notation
    Notation {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(long, default_value_t = 0)]
        decimals: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct PhysicsArgs {
    #[arg(long, value_parser = parse_vec3, default_value = "0,-9.81,0", allow_hyphen_values = true)]
    gravity: Vector3<f64>,
    /// Fixed simulation tick in seconds
    #[arg(long, default_value_t = 0.02)]
    fixed_dt: f64,
}

impl From<&PhysicsArgs> for PhysicsCfg {
    fn from(a: &PhysicsArgs) -> Self {
        PhysicsCfg {
            gravity: a.gravity,
            fixed_dt: a.fixed_dt,
        }
    }
}

/// Parse `x,y,z`.
fn parse_vec3(s: &str) -> Result<Vector3<f64>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got {s:?}"));
    }
    let mut v = Vector3::zeros();
    for (i, p) in parts.iter().enumerate() {
        v[i] = p
            .parse::<f64>()
            .map_err(|e| format!("component {i} ({p:?}): {e}"))?;
    }
    Ok(v)
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    run(cmd.action)
}

fn run(action: Action) -> Result<()> {
    match action {
        Action::Circle {
            count,
            radius,
            center,
            out,
        } => {
            let pts = sample::uniform_circle_points(count, radius, center);
            let params = json!({"count": count, "radius": radius, "center": center.as_slice()});
            emit_points("circle", &pts, &out, params)
        }
        Action::Grid {
            count,
            spacing,
            center,
            out,
        } => {
            let pts = sample::uniform_grid_points(count, spacing, center);
            let params = json!({"count": count, "spacing": spacing, "center": center.as_slice()});
            emit_points("grid", &pts, &out, params)
        }
        Action::Between { start, end, out } => {
            let pts = sample::grid_points_between(start, end);
            let params = json!({"start": start.as_slice(), "end": end.as_slice()});
            emit_points("between", &pts, &out, params)
        }
        Action::Radius {
            center,
            radius,
            offset_center,
            edges_only,
            out,
        } => {
            let pts = sample::points_in_radius(center, radius, offset_center, edges_only);
            let params = json!({
                "center": center.as_slice(),
                "radius": radius,
                "offset_center": offset_center,
                "edges_only": edges_only
            });
            emit_points("radius", &pts, &out, params)
        }
        Action::Square {
            center,
            length,
            out,
        } => {
            let pts = sample::grid_points_in_square(center, length);
            let params = json!({"center": center.as_slice(), "length": length});
            emit_points("square", &pts, &out, params)
        }
        Action::Trajectory {
            start,
            velocity,
            points,
            time_step,
            physics,
            out,
        } => {
            let cfg = PhysicsCfg::from(&physics);
            let pts = sample::velocity_trajectory_points(start, velocity, points, time_step, &cfg);
            let params = json!({
                "start": start.as_slice(),
                "velocity": velocity.as_slice(),
                "points": points,
                "time_step": time_step,
                "gravity": cfg.gravity.as_slice(),
                "fixed_dt": cfg.fixed_dt
            });
            emit_points("trajectory", &pts, &out, params)
        }
        Action::Raycast {
            rays,
            scene,
            length,
            mask,
            out,
        } => raycast(&rays, &scene, length, LayerMask(mask), &out),
        Action::Notation { value, decimals } => {
            match text::big_number_notation(value, decimals) {
                Some(s) => println!("{s}"),
                None => anyhow::bail!("{value} has no compact notation"),
            }
            Ok(())
        }
        Action::Report => report(),
    }
}

fn emit_points(
    kind: &'static str,
    points: &[Vector3<f64>],
    out: &Path,
    params: serde_json::Value,
) -> Result<()> {
    tracing::info!(kind, rows = points.len(), out = %out.display(), "sample");
    let mut df = table::points_frame(points)?;
    table::write_frame(&mut df, out)?;
    write_sidecar(out, Payload::new(kind, params, points.len()))?;
    Ok(())
}

fn raycast(rays: &Path, scene_path: &Path, length: f64, mask: LayerMask, out: &Path) -> Result<()> {
    let world = scene::load_scene(scene_path)?;
    let (origins, directions) = table::read_rays(rays)?;
    tracing::info!(
        rays = origins.len(),
        colliders = world.len(),
        length,
        mask = mask.0,
        "raycast"
    );
    let hits = batched_raycast(&world, &origins, &directions, length, mask)?;
    let hit_count = hits.iter().filter(|h| h.is_some()).count();
    tracing::info!(hits = hit_count, misses = hits.len() - hit_count, "raycast_done");
    let mut df = table::hits_frame(&hits)?;
    table::write_frame(&mut df, out)?;
    let params = json!({
        "rays": rays.to_string_lossy(),
        "scene": scene_path.to_string_lossy(),
        "length": length,
        "mask": mask.0
    });
    write_sidecar(out, Payload::new("raycast", params, hits.len()))?;
    Ok(())
}

fn report() -> Result<()> {
    let physics = PhysicsCfg::default();
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "pointkit": pointkit::VERSION,
        "physics_defaults": {
            "gravity": physics.gravity.as_slice(),
            "fixed_dt": physics.fixed_dt
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn vec3_parsing() {
        assert_eq!(parse_vec3("1, -2.5,3").unwrap(), Vector3::new(1.0, -2.5, 3.0));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,b,3").is_err());
    }

    #[test]
    fn negative_vectors_parse_as_values() {
        let cmd = Cmd::try_parse_from([
            "pointkit",
            "trajectory",
            "--velocity",
            "-1,4,0",
            "--gravity",
            "0,-20,0",
            "--out",
            "t.csv",
        ])
        .unwrap();
        match cmd.action {
            Action::Trajectory {
                velocity, physics, ..
            } => {
                assert_eq!(velocity, Vector3::new(-1.0, 4.0, 0.0));
                assert_eq!(physics.gravity, Vector3::new(0.0, -20.0, 0.0));
                assert_eq!(physics.fixed_dt, 0.02);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn circle_writes_table_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("circle.csv");
        run(Action::Circle {
            count: 6,
            radius: 2.0,
            center: Vector3::zeros(),
            out: out.clone(),
        })
        .unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 7);
        assert!(dir.path().join("circle.provenance.json").exists());
    }

    #[test]
    fn raycast_end_to_end() {
        let dir = tempdir().unwrap();
        let rays = dir.path().join("rays.csv");
        let scene = dir.path().join("scene.json");
        let out = dir.path().join("hits.csv");
        std::fs::write(&rays, "ox,oy,oz,dx,dy,dz\n0,10,0,0,-1,0\n0,10,0,0,1,0\n").unwrap();
        std::fs::write(
            &scene,
            r#"{ "colliders": [ { "shape": "plane", "normal": [0,1,0], "offset": 0 } ] }"#,
        )
        .unwrap();
        run(Action::Raycast {
            rays,
            scene,
            length: 100.0,
            mask: u32::MAX,
            out: out.clone(),
        })
        .unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("hit,x,y,z"));
        assert!(lines.next().unwrap().starts_with("true"));
        assert!(lines.next().unwrap().starts_with("false"));
    }
}
