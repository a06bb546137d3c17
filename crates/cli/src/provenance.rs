use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sidecar written next to every result file.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub lib_version: &'static str,
    pub callsite: Callsite,
    pub tag: Option<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    /// Snapshot for `params` recorded at the caller's location.
    #[track_caller]
    pub fn new(params: Value, tag: Option<String>) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            lib_version: rectfit::VERSION,
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            tag,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut prov: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    prov.outputs = vec![artifact.to_string_lossy().into_owned()];
    fs::write(&path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then runtime) or `git rev-parse`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
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
