//! Command-line configuration.
//!
//! Every flag can also be set through a `GOGOL_*` environment variable.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::builder::TypedValueParser;
use clap::Parser;

use gogol::core::{load_grid, Grid, Pattern, PATTERNS};
use gogol::engine::DriverConfig;
use gogol::types::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_PATTERN_HEIGHT, DEFAULT_PATTERN_WIDTH, DEFAULT_SPEED_MS,
};

#[derive(Debug, Parser)]
#[command(name = "gogol", version, about = "Conway's Game of Life in the terminal")]
pub struct Args {
    /// Grid file: one line per row, `1` marks a live cell
    #[arg(long, short = 'f', env = "GOGOL_FILENAME")]
    pub filename: Option<PathBuf>,

    /// Built-in pattern to start from when no file is given
    #[arg(long, short = 'p', env = "GOGOL_PATTERN", default_value = "glider")]
    pub pattern: String,

    /// Board width for built-in patterns
    #[arg(long, default_value_t = DEFAULT_PATTERN_WIDTH, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub width: usize,

    /// Board height for built-in patterns
    #[arg(long, default_value_t = DEFAULT_PATTERN_HEIGHT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub height: usize,

    /// Milliseconds between generations
    #[arg(long, short = 's', env = "GOGOL_SPEED", default_value_t = DEFAULT_SPEED_MS)]
    pub speed: u64,

    /// Number of generations to show
    #[arg(long, short = 'm', env = "GOGOL_MAX", default_value_t = DEFAULT_MAX_ITERATIONS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max: u32,

    /// Run without the terminal UI and print the last generation
    #[arg(long)]
    pub headless: bool,

    /// Write logs to this file
    #[arg(long, env = "GOGOL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn driver_config(&self) -> Result<DriverConfig> {
        Ok(DriverConfig::new(
            Duration::from_millis(self.speed),
            self.max,
        )?)
    }

    /// Load the starting generation from the file or the named pattern.
    pub fn initial_grid(&self) -> Result<Grid> {
        if let Some(path) = &self.filename {
            return load_grid(path)
                .with_context(|| format!("could not load grid from {}", path.display()));
        }

        let pattern = Pattern::by_name(&self.pattern).ok_or_else(|| {
            let names: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
            anyhow!(
                "unknown pattern '{}' (available: {})",
                self.pattern,
                names.join(", ")
            )
        })?;
        pattern.place(self.width, self.height).with_context(|| {
            format!(
                "pattern '{}' does not fit a {}x{} board",
                pattern.name, self.width, self.height
            )
        })
    }
}
