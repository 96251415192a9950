//! Core module - the grid data model
//!
//! This crate holds the immutable [`Grid`] and the ways to build one. It has
//! no dependencies on rendering or timing, so it can be used from the
//! terminal frontend, the headless runner and tests alike.
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular, immutable cell matrix with bounds-checked reads
//! - [`load`]: parser for line-oriented grid files (`1` = alive)
//! - [`patterns`]: built-in seeds (block, blinker, glider, ...)
//! - [`error`]: construction and loading errors
//!
//! # Example
//!
//! ```
//! use gogol_core::{parse_grid, Grid};
//! use gogol_core::types::Cell;
//!
//! let grid = parse_grid("010\n010\n010\n").unwrap();
//! assert_eq!((grid.width(), grid.height()), (3, 3));
//! assert_eq!(grid.get(1, 1), Some(Cell::Alive));
//!
//! // Reads outside the board fail instead of wrapping.
//! assert_eq!(grid.get(3, 0), None);
//! assert!(grid.cell(0, 3).is_err());
//! ```

pub mod error;
pub mod grid;
pub mod load;
pub mod patterns;

pub use gogol_types as types;

pub use error::{GridError, LoadError};
pub use grid::Grid;
pub use load::{load_grid, parse_grid};
pub use patterns::{Pattern, PATTERNS};
