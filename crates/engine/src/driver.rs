//! Tick driver.
//!
//! Each tick the driver hands the current generation to a blocking worker,
//! presents the same generation to the frontend while the worker runs, waits
//! one tick interval and then takes the worker's result as the new current
//! generation. Both sides only read the shared `Arc<Grid>`, so nothing is
//! locked. Exactly one next generation is produced and consumed per tick
//! before the next worker is launched.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::Grid;
use crate::step::next_generation;
use crate::types::{DEFAULT_MAX_ITERATIONS, DEFAULT_SPEED_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max iterations must be at least 1")]
    ZeroIterations,
}

/// Timing and iteration budget for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    tick: Duration,
    max_iterations: u32,
}

impl DriverConfig {
    pub fn new(tick: Duration, max_iterations: u32) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(Self {
            tick,
            max_iterations,
        })
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_SPEED_MS),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// One generation as handed to a frontend.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    /// 1-based generation number.
    pub iteration: u32,
    pub max_iterations: u32,
}

/// Something that displays generations (terminal, headless sink, tests).
pub trait Frontend {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of generations presented.
    pub rendered: u32,
    /// The last generation presented.
    pub last: Grid,
    /// True if the shutdown signal ended the run early.
    pub interrupted: bool,
}

pub struct Driver {
    config: DriverConfig,
    step: fn(&Grid) -> Grid,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            step: next_generation,
        }
    }

    /// Replace the transition function (used to exercise failure paths).
    pub fn with_step(mut self, step: fn(&Grid) -> Grid) -> Self {
        self.step = step;
        self
    }

    /// Run until the iteration budget is spent or `shutdown` resolves.
    ///
    /// The shutdown signal is only observed while waiting between ticks.
    pub async fn run<F, S>(&self, frontend: &mut F, initial: Grid, shutdown: S) -> Result<RunSummary>
    where
        F: Frontend + ?Sized,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let max_iterations = self.config.max_iterations;
        let step = self.step;
        let mut current = Arc::new(initial);
        let mut iteration = 1;

        info!(
            width = current.width(),
            height = current.height(),
            max_iterations,
            tick = ?self.config.tick,
            "simulation started"
        );

        loop {
            // The last generation is only shown, never advanced.
            let pending = (iteration < max_iterations).then(|| {
                let grid = Arc::clone(&current);
                tokio::task::spawn_blocking(move || step(&grid))
            });

            frontend
                .present(&Frame {
                    grid: &current,
                    iteration,
                    max_iterations,
                })
                .with_context(|| format!("failed to present generation {iteration}"))?;
            debug!(iteration, population = current.population(), "tick");

            let interrupted = tokio::select! {
                biased;
                _ = &mut shutdown => true,
                _ = tokio::time::sleep(self.config.tick) => false,
            };

            if interrupted {
                warn!(iteration, "simulation stopped before the iteration budget");
                return Ok(RunSummary {
                    rendered: iteration,
                    last: into_owned(current),
                    interrupted: true,
                });
            }

            let Some(pending) = pending else {
                break;
            };
            let next = pending
                .await
                .with_context(|| format!("generation {} worker failed", iteration + 1))?;
            current = Arc::new(next);
            iteration += 1;
        }

        info!(iterations = iteration, population = current.population(), "simulation finished");
        Ok(RunSummary {
            rendered: iteration,
            last: into_owned(current),
            interrupted: false,
        })
    }
}

fn into_owned(grid: Arc<Grid>) -> Grid {
    Arc::try_unwrap(grid).unwrap_or_else(|shared| (*shared).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_is_rejected() {
        assert_eq!(
            DriverConfig::new(Duration::from_millis(10), 0),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn default_config_matches_cli_defaults() {
        let config = DriverConfig::default();
        assert_eq!(config.tick(), Duration::from_millis(500));
        assert_eq!(config.max_iterations(), 100);
    }
}
