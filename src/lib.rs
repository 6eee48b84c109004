//! aocgen: Scaffold per-day Advent of Code Bazel project directories.
//!
//! Each generated day gets a `BUILD.bazel`, a `src/main.rs` rendered from the
//! shipped templates, and an empty `input.txt`. Days that already exist are
//! skipped, so re-running is safe.

pub mod config;
pub mod error;
pub mod generator;
pub mod templates;
pub mod workspace;

pub use config::RunConfig;
pub use error::AppError;
pub use generator::{DayOutcome, Generator, Summary};

use templates::TemplateStore;

/// Generate day directories for `config` under the resolved workspace root.
///
/// Resolves the workspace and templates directories, loads the templates, and
/// runs the generator. Returns the created/skipped counts.
pub fn generate(config: RunConfig) -> Result<Summary, AppError> {
    config.validate()?;

    let root = workspace::workspace_root()?;
    let templates = TemplateStore::open(&workspace::templates_root()?)?;

    Generator::new(config, root, templates).run()
}
