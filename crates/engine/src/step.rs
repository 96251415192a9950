//! Generation transition.
//!
//! The board has a hard edge: neighbor coordinates that fall outside the grid
//! are skipped, never wrapped around to the opposite side.

use crate::core::Grid;
use crate::types::Cell;

const OFFSETS: [isize; 3] = [-1, 0, 1];

/// Count alive cells in the Moore neighborhood of `(x, y)`.
///
/// At most 8, at most 3 in a corner and at most 5 along an edge.
pub fn alive_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for dy in OFFSETS {
        let Some(ny) = y.checked_add_signed(dy) else {
            continue;
        };
        for dx in OFFSETS {
            if dx == 0 && dy == 0 {
                continue;
            }
            let Some(nx) = x.checked_add_signed(dx) else {
                continue;
            };
            if grid.get(nx, ny).is_some_and(Cell::is_alive) {
                count += 1;
            }
        }
    }
    count
}

/// Conway's B3/S23 rule.
#[inline]
pub fn apply_rule(cell: Cell, alive_neighbors: u8) -> Cell {
    match (cell, alive_neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Compute the next generation into a freshly allocated grid.
///
/// Pure: the input is only read, and equal inputs give equal outputs.
pub fn next_generation(current: &Grid) -> Grid {
    current.map(|x, y, cell| apply_rule(cell, alive_neighbors(current, x, y)))
}
