//! Tabular IO for point sets and ray batches (CSV or Parquet by extension).

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use pointkit::raycast::RayHit;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Columns `x, y, z`.
pub fn points_frame(points: &[Vector3<f64>]) -> PolarsResult<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
    DataFrame::new(vec![
        Series::new("x".into(), xs),
        Series::new("y".into(), ys),
        Series::new("z".into(), zs),
    ])
}

/// One row per ray: `hit` flag, point, normal, distance, collider (nulls on a miss).
pub fn hits_frame(hits: &[Option<RayHit>]) -> PolarsResult<DataFrame> {
    let pick = |f: fn(&RayHit) -> f64| -> Vec<Option<f64>> {
        hits.iter().map(|h| h.as_ref().map(f)).collect()
    };
    let hit: Vec<bool> = hits.iter().map(Option::is_some).collect();
    let collider: Vec<Option<u64>> = hits
        .iter()
        .map(|h| h.map(|h| h.collider.0 as u64))
        .collect();
    DataFrame::new(vec![
        Series::new("hit".into(), hit),
        Series::new("x".into(), pick(|h| h.point.x)),
        Series::new("y".into(), pick(|h| h.point.y)),
        Series::new("z".into(), pick(|h| h.point.z)),
        Series::new("nx".into(), pick(|h| h.normal.x)),
        Series::new("ny".into(), pick(|h| h.normal.y)),
        Series::new("nz".into(), pick(|h| h.normal.z)),
        Series::new("distance".into(), pick(|h| h.distance)),
        Series::new("collider".into(), collider),
    ])
}

/// Write `df` to `path`; `.parquet` selects Parquet, anything else CSV.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let is_parquet = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing csv {}", path.display()))?;
    }
    Ok(())
}

/// Read a ray batch from CSV with columns `ox, oy, oz, dx, dy, dz`.
pub fn read_rays(path: &Path) -> Result<(Vec<Vector3<f64>>, Vec<Vector3<f64>>)> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading rays {}", path.display()))?;
    let column = |name: &str| -> Result<Vec<f64>> {
        let series = df
            .column(name)
            .with_context(|| format!("missing column {name}"))?
            .cast(&DataType::Float64)?;
        let values: Option<Vec<f64>> = series.f64()?.into_iter().collect();
        match values {
            Some(v) => Ok(v),
            None => bail!("column {name} contains nulls"),
        }
    };
    let [ox, oy, oz, dx, dy, dz] = ["ox", "oy", "oz", "dx", "dy", "dz"].map(column);
    let (ox, oy, oz, dx, dy, dz) = (ox?, oy?, oz?, dx?, dy?, dz?);
    let origins = (0..ox.len())
        .map(|i| Vector3::new(ox[i], oy[i], oz[i]))
        .collect();
    let directions = (0..dx.len())
        .map(|i| Vector3::new(dx[i], dy[i], dz[i]))
        .collect();
    Ok((origins, directions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointkit::raycast::ColliderId;
    use tempfile::tempdir;

    #[test]
    fn points_csv_has_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/points.csv");
        let pts = vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.5, 0.0)];
        let mut df = points_frame(&pts).unwrap();
        write_frame(&mut df, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("x,y,z"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn hits_frame_marks_misses() {
        let hits = vec![
            Some(RayHit {
                point: Vector3::new(0.0, 4.0, 0.0),
                normal: Vector3::y(),
                distance: 6.0,
                collider: ColliderId(1),
            }),
            None,
        ];
        let df = hits_frame(&hits).unwrap();
        assert_eq!(df.shape(), (2, 9));
        assert_eq!(df.column("distance").unwrap().null_count(), 1);
        assert_eq!(df.column("collider").unwrap().null_count(), 1);
    }

    #[test]
    fn rays_round_trip_from_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rays.csv");
        std::fs::write(&path, "ox,oy,oz,dx,dy,dz\n0,10,0,0,-1,0\n5,1,-10,0,0,1\n").unwrap();
        let (origins, dirs) = read_rays(&path).unwrap();
        assert_eq!(origins, vec![Vector3::new(0.0, 10.0, 0.0), Vector3::new(5.0, 1.0, -10.0)]);
        assert_eq!(dirs[1], Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rays_require_all_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "ox,oy,oz\n0,0,0\n").unwrap();
        assert!(read_rays(&path).is_err());
    }
}
