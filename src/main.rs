//! Terminal Game of Life runner (default binary).
//!
//! Loads the first generation from a file (or a built-in pattern), then shows
//! one generation per tick until the iteration budget is spent. The last
//! generation stays on screen until `q` is pressed.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use gogol::core::Grid;
use gogol::engine::{Driver, Frame, Frontend};
use gogol::term::{spawn_quit_listener, TermFrontend};

use crate::cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.headless)?;

    let initial = args.initial_grid()?;
    let driver = Driver::new(args.driver_config()?);

    if args.headless {
        return run_headless(&driver, initial).await;
    }

    let mut term = TermFrontend::enter()?;
    let result = run(&driver, &mut term, initial).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run(driver: &Driver, term: &mut TermFrontend, initial: Grid) -> Result<()> {
    let mut quit = spawn_quit_listener();
    let summary = driver
        .run(term, initial, async {
            let _ = (&mut quit).await;
        })
        .await?;

    if !summary.interrupted {
        // Keep the final generation up until the user leaves.
        let _ = quit.await;
    }
    Ok(())
}

/// Frontend that only traces generations.
struct Headless;

impl Frontend for Headless {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        debug!(
            iteration = frame.iteration,
            population = frame.grid.population(),
            "generation"
        );
        Ok(())
    }
}

async fn run_headless(driver: &Driver, initial: Grid) -> Result<()> {
    let summary = driver
        .run(&mut Headless, initial, async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    print!("{}", summary.last);
    Ok(())
}
