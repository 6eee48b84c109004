//! Shared testing utilities for aocgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use aocgen::workspace::{BUILD_WORKSPACE_ENV, RUNFILES_ENV};

/// Testing harness providing an isolated workspace and runfiles tree.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    workspace: PathBuf,
    runfiles: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated environment with the shipped templates staged as
    /// Bazel-style runfiles.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&workspace).expect("Failed to create test workspace");

        let runfiles = root.path().join("runfiles");
        let templates_dst = runfiles.join("advent_of_code").join("templates");
        fs::create_dir_all(&templates_dst).expect("Failed to create runfiles templates dir");

        let templates_src = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
        for entry in fs::read_dir(&templates_src).expect("Failed to read shipped templates") {
            let entry = entry.expect("Failed to read template entry");
            fs::copy(entry.path(), templates_dst.join(entry.file_name()))
                .expect("Failed to stage template");
        }

        Self { root, workspace, runfiles }
    }

    /// Path to the workspace root the generator writes into.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Build a command for invoking the compiled `aocgen` binary against the
    /// test workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("aocgen").expect("Failed to locate aocgen binary");
        cmd.env(BUILD_WORKSPACE_ENV, &self.workspace).env(RUNFILES_ENV, &self.runfiles);
        cmd
    }

    /// Path to a year directory in the workspace.
    pub fn year_path(&self, year: i32) -> PathBuf {
        self.workspace.join(year.to_string())
    }

    /// Path to a day directory in the workspace.
    pub fn day_path(&self, year: i32, day: &str) -> PathBuf {
        self.year_path(year).join(day)
    }

    /// Assert that a day directory is fully populated.
    pub fn assert_day_populated(&self, year: i32, day: &str) {
        let day_dir = self.day_path(year, day);
        assert!(day_dir.is_dir(), "Day directory should exist at {}", day_dir.display());
        assert!(day_dir.join("BUILD.bazel").is_file(), "Day BUILD.bazel should exist");
        assert!(day_dir.join("src/main.rs").is_file(), "Day src/main.rs should exist");

        let input = day_dir.join("input.txt");
        assert!(input.is_file(), "Day input.txt should exist");
        assert_eq!(
            fs::read_to_string(&input).expect("Failed to read input.txt"),
            "",
            "input.txt should be empty"
        );
    }

    /// Assert that the workspace holds no year directories at all.
    pub fn assert_workspace_empty(&self) {
        let entries: Vec<_> = fs::read_dir(&self.workspace)
            .expect("Failed to read workspace")
            .collect();
        assert!(entries.is_empty(), "Workspace should be empty, found {} entries", entries.len());
    }
}
