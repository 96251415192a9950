//! GOGOL - Conway's Game of Life in the terminal (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` so binaries, tests and
//! benches can use a single `gogol::{core, engine, term, types}` path.

pub use gogol_core as core;
pub use gogol_engine as engine;
pub use gogol_term as term;
pub use gogol_types as types;
