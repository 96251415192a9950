//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so in UI mode logs only go to `--log-file`.
//! Headless runs log to stderr. `RUST_LOG` overrides the default filter.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "gogol=info,gogol_core=info,gogol_engine=info,gogol_term=info";

pub fn init(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match (log_file, headless) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
        (None, true) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
        (None, false) => {}
    }
    Ok(())
}
