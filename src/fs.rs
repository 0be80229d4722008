use crate::types::Rename;
use eyre::{Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the directory to process.
/// If `dir_override` is Some(path) that path is used as-is; otherwise the
/// current working directory. The directory is never created.
pub fn resolve_target_dir(dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir_override {
        tracing::debug!(dir = %d.display(), "using overridden target dir");
        return Ok(d);
    }

    let cwd = std::env::current_dir().wrap_err("failed to get current directory")?;
    tracing::debug!(dir = %cwd.display(), "using current directory");
    Ok(cwd)
}

/// Move `rename.from` to `rename.to` inside `dir` and return the new path.
///
/// An existing destination is not guarded against: the platform rename decides
/// whether it is overwritten or the call fails. It is only logged.
pub fn rename_entry(dir: &Path, rename: &Rename) -> Result<PathBuf> {
    let from = dir.join(&rename.from);
    let to = dir.join(&rename.to);

    if fs::symlink_metadata(&to).is_ok() {
        tracing::warn!(dest = %to.display(), "destination already exists");
    }

    fs::rename(&from, &to)
        .wrap_err_with(|| format!("failed to rename {} to {}", from.display(), to.display()))?;
    Ok(to)
}
