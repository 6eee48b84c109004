//! File-backed templates and minijinja rendering.

use std::fs;
use std::path::Path;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::error::AppError;

/// Template file names expected in the templates directory.
pub const YEAR_BUILD_TEMPLATE: &str = "year_build.bazel.j2";
pub const DAY_BUILD_TEMPLATE: &str = "day_build.bazel.j2";
pub const MAIN_RS_TEMPLATE: &str = "main.rs.j2";

/// The three templates a run needs, loaded up front.
#[derive(Debug)]
pub struct TemplateStore {
    env: Environment<'static>,
    year_build: String,
    day_build: String,
    main_rs: String,
}

impl TemplateStore {
    /// Load all templates from `dir`. A missing file surfaces the raw I/O error.
    pub fn open(dir: &Path) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        Ok(Self {
            env,
            year_build: fs::read_to_string(dir.join(YEAR_BUILD_TEMPLATE))?,
            day_build: fs::read_to_string(dir.join(DAY_BUILD_TEMPLATE))?,
            main_rs: fs::read_to_string(dir.join(MAIN_RS_TEMPLATE))?,
        })
    }

    /// Render the year-level `BUILD.bazel` content.
    pub fn render_year_build(&self, year: i32) -> Result<String, AppError> {
        Ok(self.env.render_str(&self.year_build, context! { year })?)
    }

    /// Render a day-level `BUILD.bazel`. `day` is the zero-padded label.
    pub fn render_day_build(&self, year: i32, day: &str) -> Result<String, AppError> {
        Ok(self.env.render_str(&self.day_build, context! { year, day })?)
    }

    /// Render a day's `src/main.rs`. `day` is the zero-padded label.
    pub fn render_main_rs(&self, year: i32, day: &str) -> Result<String, AppError> {
        Ok(self.env.render_str(&self.main_rs, context! { year, day })?)
    }
}
