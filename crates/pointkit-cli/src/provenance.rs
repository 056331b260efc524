use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output table: the sampler name plus its arguments.
pub struct Payload {
    pub kind: &'static str,
    pub params: Value,
    /// Number of rows written.
    pub rows: usize,
}

impl Payload {
    pub fn new(kind: &'static str, params: Value, rows: usize) -> Self {
        Self { kind, params, rows }
    }
}

/// Write `<table>.provenance.json` with code revision, callsite, sampler params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(table: P, payload: Payload) -> Result<PathBuf> {
    let table = table.as_ref();
    let sidecar = sidecar_path(table);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "pointkit": pointkit::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "kind": payload.kind,
        "params": payload.params,
        "rows": payload.rows,
        "outputs": [table.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(table: &Path) -> PathBuf {
    let mut name = table
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("points"));
    name.push(".provenance.json");
    table.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build or run time), else `git rev-parse`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(from_build) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_build.to_string();
    }
    if let Ok(from_env) = std::env::var("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/ring.parquet"));
        assert_eq!(derived, Path::new("/tmp/out/ring.provenance.json"));
    }

    #[test]
    fn sidecar_records_kind_and_rows() {
        let dir = tempdir().unwrap();
        let table = dir.path().join("circle.csv");
        fs::write(&table, "x,y,z\n").unwrap();
        let payload = Payload::new("circle", json!({"count": 8, "radius": 2.0}), 8);
        let path = write_sidecar(&table, payload).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["kind"], "circle");
        assert_eq!(parsed["rows"], 8);
        assert_eq!(parsed["params"]["count"], 8);
        assert_eq!(parsed["outputs"][0], table.to_string_lossy().as_ref());
    }
}
