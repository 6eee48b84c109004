use aocgen::{AppError, RunConfig};
use chrono::{Datelike, Local};
use clap::Parser;

#[derive(Parser)]
#[command(name = "aocgen")]
#[command(version)]
#[command(
    about = "Generate Advent of Code Bazel project directories",
    long_about = None
)]
struct Cli {
    /// Year for Advent of Code (default: current year)
    #[arg(short, long, default_value_t = Local::now().year())]
    year: i32,

    /// Total number of days to generate
    #[arg(short, long, default_value_t = 25)]
    days: u32,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<_, AppError> = aocgen::generate(RunConfig::new(cli.year, cli.days));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
