//! Loader for line-oriented grid files.
//!
//! ```text
//! 00000
//! 00100
//! 00010
//! 01110
//! ```
//!
//! Each line is a row and each character a column. `1` is alive, anything
//! else is dead. The width comes from the first line and every following
//! line must have the same length.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GridError, LoadError};
use crate::grid::Grid;
use crate::types::Cell;

/// Read and parse a grid file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(&text)?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        "loaded grid"
    );
    Ok(grid)
}

/// Parse grid text.
///
/// A final line terminator does not produce an extra empty row, and CRLF
/// line endings are accepted.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let rows = lines
        .into_iter()
        .map(|line| line.chars().map(Cell::from_char).collect())
        .collect();
    Grid::from_rows(rows)
}
