//! Run configuration and input validation.

use crate::error::AppError;

/// Year range accepted by the generator (4-digit years).
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Day-count range accepted by the generator.
pub const DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=25;

/// Immutable configuration for one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Advent of Code year, e.g. 2024.
    pub year: i32,
    /// Number of days to generate, counted from day 1.
    pub days: u32,
}

impl RunConfig {
    pub fn new(year: i32, days: u32) -> Self {
        Self { year, days }
    }

    /// Validate year and day count before any filesystem access.
    pub fn validate(&self) -> Result<(), AppError> {
        if !YEAR_RANGE.contains(&self.year) {
            return Err(AppError::invalid_input("Year must be a 4-digit number"));
        }
        if !DAYS_RANGE.contains(&self.days) {
            return Err(AppError::invalid_input("Days must be a number between 1 and 25"));
        }
        Ok(())
    }
}

/// Format a day number as the two-digit directory name (`1` -> `"01"`).
pub fn day_label(day: u32) -> String {
    format!("{:02}", day)
}
