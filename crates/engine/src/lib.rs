//! Engine module - generation transition and tick driver
//!
//! - [`step`]: the pure transition function over a [`Grid`](gogol_core::Grid)
//! - [`driver`]: the tokio tick loop that computes generation `t+1` on a
//!   blocking worker while a [`Frontend`] presents generation `t`
//!
//! # Example
//!
//! ```
//! use gogol_core::patterns::BLINKER;
//! use gogol_engine::next_generation;
//!
//! let horizontal = BLINKER.place(5, 5).unwrap();
//! let vertical = next_generation(&horizontal);
//! assert_ne!(horizontal, vertical);
//! assert_eq!(next_generation(&vertical), horizontal);
//! ```

pub mod driver;
pub mod step;

pub use gogol_core as core;
pub use gogol_types as types;

pub use driver::{ConfigError, Driver, DriverConfig, Frame, Frontend, RunSummary};
pub use step::{alive_neighbors, apply_rule, next_generation};
