//! Grid module - immutable cell matrix
//!
//! A grid is `width` columns by `height` rows, both at least 1 and fixed for
//! the grid's lifetime. Cells are stored in a flat vector, row-major
//! (`y * width + x`). Coordinates: `(0, 0)` is the top-left cell, x grows to
//! the right, y grows downwards.
//!
//! There are no mutating methods. A new generation is derived with
//! [`Grid::map`], which always allocates a fresh grid of the same size.

use std::fmt;

use crate::error::GridError;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        // A Vec can hold at most isize::MAX bytes.
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Build a grid from rows of cells.
    ///
    /// The first row fixes the width; every other row must match it.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let height = rows.len();
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid where exactly the listed coordinates are alive.
    pub fn from_alive(
        width: usize,
        height: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for &(x, y) in alive {
            let idx = grid.checked_index(x, y)?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Get the cell at `(x, y)`.
    /// Returns None if out of bounds; coordinates never wrap or clamp.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Same as [`Grid::get`] but out-of-bounds reads are an error.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Derive a new grid of the same size, computing each cell from its
    /// coordinate and current state.
    pub fn map<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(usize, usize, Cell) -> Cell,
    {
        let mut cells = Vec::with_capacity(self.cells.len());
        for (y, row) in self.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                cells.push(f(x, y, cell));
            }
        }
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

/// Prints the grid in the file format the loader reads.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
