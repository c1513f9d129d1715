//! Provenance sidecar (`<stem>.provenance.json`) written next to every export.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an exported table, serialized as the sidecar document.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub hypercell_version: &'static str,
    /// Whether the typed lookups of the producing build ran index checks.
    pub checks_enabled: bool,
    pub format: &'static str,
    pub rows: usize,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn for_export(artifact: &Path, format: &'static str, rows: usize) -> Self {
        Self {
            code_rev: current_git_rev(),
            hypercell_version: hypercell::VERSION,
            checks_enabled: hypercell::cfg::CHECKS_ENABLED,
            format,
            rows,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }

    /// Write the sidecar for `artifact`; returns its path.
    pub fn write_beside(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        let doc = serde_json::to_vec_pretty(self)?;
        fs::write(&path, doc).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/tables.parquet` -> `dir/tables.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit recorded in provenance: `GIT_COMMIT` (build time, then runtime),
/// else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(head_rev)
    .unwrap_or_else(|| "unknown".to_string())
}

fn head_rev() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|rev| !rev.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/tables.parquet")),
            Path::new("/tmp/output/tables.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("plain")),
            Path::new("plain.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_export_and_build() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("t.csv");
        fs::write(&artifact, "relation,dim\n").unwrap();
        let path = Provenance::for_export(&artifact, "csv", 0)
            .write_beside(&artifact)
            .unwrap();
        assert_eq!(path, dir.path().join("t.provenance.json"));

        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().to_string());
        assert_eq!(parsed["format"], "csv");
        assert_eq!(parsed["rows"], 0);
        assert_eq!(parsed["hypercell_version"], hypercell::VERSION);
        assert_eq!(parsed["checks_enabled"], hypercell::cfg::CHECKS_ENABLED);
        assert!(parsed.get("callsite").is_none());
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }
}
