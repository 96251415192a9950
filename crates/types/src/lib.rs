//! Core types module - shared cell state and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the grid model, the transition engine and the
//! terminal view.
//!
//! # Grid text format
//!
//! Grid files are line oriented: each line is a row and each character is a
//! column. [`ALIVE_CHAR`] marks a live cell, every other character is dead.
//!
//! # Timing defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SPEED_MS` | 500 | Tick interval between generations |
//! | `DEFAULT_MAX_ITERATIONS` | 100 | Generations rendered before stopping |
//!
//! # Examples
//!
//! ```
//! use gogol_types::{Cell, ALIVE_CHAR};
//!
//! assert_eq!(Cell::from_char(ALIVE_CHAR), Cell::Alive);
//! assert_eq!(Cell::from_char('.'), Cell::Dead);
//! assert!(Cell::from_bool(true).is_alive());
//! ```

/// Character that marks a live cell in grid files.
pub const ALIVE_CHAR: char = '1';

/// Character written for a dead cell when a grid is printed.
pub const DEAD_CHAR: char = '0';

/// Default tick interval in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 500;

/// Default number of generations to render.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default board size used when seeding from a built-in pattern.
pub const DEFAULT_PATTERN_WIDTH: usize = 40;
pub const DEFAULT_PATTERN_HEIGHT: usize = 20;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub fn from_bool(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    /// Decode a grid-file character. Anything other than [`ALIVE_CHAR`] is dead.
    pub fn from_char(ch: char) -> Self {
        Self::from_bool(ch == ALIVE_CHAR)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Alive => ALIVE_CHAR,
            Cell::Dead => DEAD_CHAR,
        }
    }
}
