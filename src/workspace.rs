//! Workspace and template directory resolution.
//!
//! The generator can be invoked directly or via `bazel run`. Under Bazel the
//! output root comes from `BUILD_WORKSPACE_DIRECTORY` and the templates ship
//! as runfiles; outside Bazel both fall back to paths next to the executable.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Set by `bazel run` to the root of the invoking workspace.
pub const BUILD_WORKSPACE_ENV: &str = "BUILD_WORKSPACE_DIRECTORY";

/// Set by Bazel to the directory holding the target's runfiles.
pub const RUNFILES_ENV: &str = "RUNFILES_DIR";

/// Workspace name under which templates appear in the runfiles tree.
const RUNFILES_WORKSPACE: &str = "advent_of_code";

/// Directory name holding the templates next to the executable.
const TEMPLATES_DIR: &str = "templates";

/// Resolve the directory that year directories are created under.
pub fn workspace_root() -> Result<PathBuf, AppError> {
    if let Some(dir) = env::var_os(BUILD_WORKSPACE_ENV) {
        return Ok(PathBuf::from(dir));
    }
    exe_dir()
}

/// Resolve the directory holding the `.j2` template files.
pub fn templates_root() -> Result<PathBuf, AppError> {
    if let Some(dir) = env::var_os(RUNFILES_ENV) {
        return Ok(PathBuf::from(dir).join(RUNFILES_WORKSPACE).join(TEMPLATES_DIR));
    }
    Ok(exe_dir()?.join(TEMPLATES_DIR))
}

fn exe_dir() -> Result<PathBuf, AppError> {
    let exe = env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(PathBuf::from(".")),
    }
}
