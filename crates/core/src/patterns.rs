//! Built-in seed patterns.
//!
//! Cells are `(x, y)` offsets from the pattern's top-left corner.
//! [`Pattern::place`] centers a pattern on an otherwise dead board.

use crate::error::GridError;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

impl Pattern {
    /// Look up a built-in pattern (case-insensitive).
    pub fn by_name(name: &str) -> Option<Pattern> {
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Bounding box as `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        let w = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (w, h)
    }

    /// Center the pattern on a dead `width` x `height` board.
    pub fn place(&self, width: usize, height: usize) -> Result<Grid, GridError> {
        let (w, h) = self.extent();
        let ox = width.saturating_sub(w) / 2;
        let oy = height.saturating_sub(h) / 2;
        let alive: Vec<(usize, usize)> = self
            .cells
            .iter()
            .map(|&(x, y)| (ox + x, oy + y))
            .collect();
        Grid::from_alive(width, height, &alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Pattern::by_name("Glider"), Some(GLIDER));
        assert_eq!(Pattern::by_name("R-PENTOMINO"), Some(R_PENTOMINO));
        assert_eq!(Pattern::by_name("spaceship"), None);
    }

    #[test]
    fn extents() {
        assert_eq!(BLOCK.extent(), (2, 2));
        assert_eq!(BLINKER.extent(), (3, 1));
        assert_eq!(BEACON.extent(), (4, 4));
    }

    #[test]
    fn place_centers_pattern() {
        let grid = BLINKER.place(5, 5).unwrap();
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.get(1, 2), Some(Cell::Alive));
        assert_eq!(grid.get(2, 2), Some(Cell::Alive));
        assert_eq!(grid.get(3, 2), Some(Cell::Alive));
    }

    #[test]
    fn place_on_too_small_board_fails() {
        let err = BEACON.place(3, 3).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn every_pattern_has_a_unique_name() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
