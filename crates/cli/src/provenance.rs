use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of a `<artifact>.provenance.json` sidecar.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub maxrect_version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    /// Snapshot for `params`, recording the caller's source location.
    #[track_caller]
    pub fn capture<P: Serialize>(params: &P, outputs: Vec<String>) -> Result<Self> {
        let loc = Location::caller();
        Ok(Self {
            code_rev: current_git_rev(),
            maxrect_version: maxrect::VERSION,
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            params: serde_json::to_value(params).context("serializing run params")?,
            outputs,
        })
    }
}

/// Write the provenance sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: Serialize>(artifact: &Path, params: &P) -> Result<PathBuf> {
    let doc = Provenance::capture(params, vec![artifact.to_string_lossy().into_owned()])?;
    let path = sidecar_path(artifact);
    ensure_parent(&path)?;
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display())),
        _ => Ok(()),
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("result"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
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
