//! Provenance sidecars: `<stem>.provenance.json` next to a written artifact.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: run parameters plus every file written.
pub struct Sidecar {
    params: Value,
    extra_outputs: Vec<PathBuf>,
}

impl Sidecar {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            extra_outputs: Vec::new(),
        }
    }

    /// Record another file written alongside the artifact.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_outputs.push(path.into());
        self
    }

    /// Write the sidecar for `artifact`; returns its path.
    #[track_caller]
    pub fn write_next_to(self, artifact: &Path) -> Result<PathBuf> {
        let callsite = Location::caller();
        let path = sibling(artifact, "provenance.json");
        let outputs: Vec<String> = std::iter::once(artifact.to_path_buf())
            .chain(self.extra_outputs)
            .map(|p| p.display().to_string())
            .collect();
        let doc = json!({
            "code_rev": code_rev(),
            "seatmap_version": seatmap::VERSION,
            "callsite": format!("{}:{}", callsite.file(), callsite.line()),
            "params": self.params,
            "outputs": outputs,
        });
        fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/<stem>.<suffix>` for `dir/<stem>.<ext>`.
pub fn sibling(artifact: &Path, suffix: &str) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.{suffix}"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
