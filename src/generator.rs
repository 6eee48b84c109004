//! Scaffold generation for year and day directories.

use std::fs;
use std::path::PathBuf;

use crate::config::{RunConfig, day_label};
use crate::error::AppError;
use crate::templates::TemplateStore;

/// Result of generating a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    /// The day directory was created and populated.
    Created,
    /// The day directory already existed and was left untouched.
    Skipped,
}

/// Created/skipped counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: u32,
    pub skipped: u32,
}

/// Generates the directory tree for one year under a workspace root.
pub struct Generator {
    config: RunConfig,
    year_dir: PathBuf,
    templates: TemplateStore,
}

impl Generator {
    pub fn new(config: RunConfig, workspace_root: PathBuf, templates: TemplateStore) -> Self {
        let year_dir = workspace_root.join(config.year.to_string());
        Self { config, year_dir, templates }
    }

    /// Validate inputs, ensure the year directory, and generate each requested
    /// day in order. Errors past validation propagate without cleanup.
    pub fn run(&self) -> Result<Summary, AppError> {
        self.config.validate()?;

        println!(
            "🎄 Advent of Code {} - Generating {} day(s)",
            self.config.year, self.config.days
        );
        println!("{}", "=".repeat(50));

        self.ensure_year_dir()?;

        let mut summary = Summary::default();
        for day in 1..=self.config.days {
            match self.generate_day(day)? {
                DayOutcome::Created => summary.created += 1,
                DayOutcome::Skipped => summary.skipped += 1,
            }
        }

        println!("{}", "=".repeat(50));
        println!("✅ Done!");
        println!("   Created: {} day(s)", summary.created);
        println!("   Skipped: {} day(s) (already existed)", summary.skipped);

        Ok(summary)
    }

    /// Create the year directory and its `BUILD.bazel` if absent. No-op when
    /// the directory already exists.
    pub fn ensure_year_dir(&self) -> Result<(), AppError> {
        if self.year_dir.exists() {
            return Ok(());
        }

        fs::create_dir_all(&self.year_dir)?;
        println!("📁 Created year directory: {}/", self.config.year);

        let build = self.templates.render_year_build(self.config.year)?;
        fs::write(self.year_dir.join("BUILD.bazel"), build)?;
        Ok(())
    }

    /// Generate one day's project directory. Directory existence is the sole
    /// "already generated" marker.
    pub fn generate_day(&self, day: u32) -> Result<DayOutcome, AppError> {
        let label = day_label(day);
        let day_dir = self.year_dir.join(&label);

        if day_dir.exists() {
            println!("⏭️  Day {}: Already exists, skipping", label);
            return Ok(DayOutcome::Skipped);
        }

        println!("🔨 Day {}: Creating project...", label);

        fs::create_dir_all(day_dir.join("src"))?;

        let build = self.templates.render_day_build(self.config.year, &label)?;
        fs::write(day_dir.join("BUILD.bazel"), build)?;

        let main_rs = self.templates.render_main_rs(self.config.year, &label)?;
        fs::write(day_dir.join("src").join("main.rs"), main_rs)?;

        fs::write(day_dir.join("input.txt"), "")?;

        Ok(DayOutcome::Created)
    }
}
