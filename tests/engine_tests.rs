//! Transition engine tests - rule behavior on known patterns

use gogol::core::patterns::{BEACON, BLINKER, BLOCK, GLIDER, TOAD};
use gogol::core::Grid;
use gogol::engine::{alive_neighbors, next_generation};
use gogol::types::Cell;

fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y) == Some(Cell::Alive) {
                cells.push((x, y));
            }
        }
    }
    cells
}

fn advance(grid: &Grid, generations: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = next_generation(&current);
    }
    current
}

#[test]
fn test_all_dead_grid_stays_dead() {
    for (w, h) in [(1, 1), (1, 7), (7, 1), (3, 3), (16, 9)] {
        let grid = Grid::new(w, h).unwrap();
        let next = next_generation(&grid);
        assert_eq!(next.population(), 0, "{w}x{h}");
        assert_eq!((next.width(), next.height()), (w, h));
    }
}

#[test]
fn test_isolated_cell_dies() {
    for (x, y) in [(0, 0), (2, 2), (4, 0), (4, 4), (0, 3)] {
        let grid = Grid::from_alive(5, 5, &[(x, y)]).unwrap();
        assert_eq!(alive_neighbors(&grid, x, y), 0);
        assert_eq!(next_generation(&grid).population(), 0, "cell at ({x}, {y})");
    }
}

#[test]
fn test_block_is_a_still_life() {
    let grid = Grid::from_alive(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
    for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
        assert_eq!(alive_neighbors(&grid, x, y), 3);
    }

    let next = next_generation(&grid);
    assert_eq!(next, grid);
    // The margin around the block stays dead.
    for x in 0..4 {
        assert_eq!(next.get(x, 0), Some(Cell::Dead));
        assert_eq!(next.get(x, 3), Some(Cell::Dead));
    }
    for y in 0..4 {
        assert_eq!(next.get(0, y), Some(Cell::Dead));
        assert_eq!(next.get(3, y), Some(Cell::Dead));
    }

    let placed = BLOCK.place(8, 8).unwrap();
    assert_eq!(advance(&placed, 5), placed);
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let horizontal = Grid::from_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
    let vertical = next_generation(&horizontal);
    assert_eq!(alive_cells(&vertical), vec![(2, 1), (2, 2), (2, 3)]);

    let back = next_generation(&vertical);
    assert_eq!(back, horizontal);
    assert_eq!(BLINKER.place(5, 5).unwrap(), horizontal);
}

#[test]
fn test_other_period_two_oscillators() {
    for pattern in [TOAD, BEACON] {
        let start = pattern.place(10, 10).unwrap();
        let next = next_generation(&start);
        assert_ne!(next, start, "{} should change", pattern.name);
        assert_eq!(next_generation(&next), start, "{} should return", pattern.name);
    }
}

#[test]
fn test_glider_translates_diagonally() {
    let start = Grid::from_alive(8, 8, GLIDER.cells).unwrap();
    let after = advance(&start, 4);
    let shifted: Vec<(usize, usize)> = alive_cells(&start)
        .into_iter()
        .map(|(x, y)| (x + 1, y + 1))
        .collect();
    assert_eq!(alive_cells(&after), shifted);
}

#[test]
fn test_corner_counts_only_on_grid_neighbors() {
    let grid = Grid::from_alive(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
    assert_eq!(alive_neighbors(&grid, 0, 0), 3);

    // On a torus the far column and row would also touch (0, 0).
    let with_far_edges = Grid::from_alive(
        4,
        4,
        &[(1, 0), (0, 1), (1, 1), (3, 0), (3, 1), (0, 3), (1, 3), (3, 3)],
    )
    .unwrap();
    assert_eq!(alive_neighbors(&with_far_edges, 0, 0), 3);
}

#[test]
fn test_corner_cell_of_two_by_two() {
    // Every cell has exactly three neighbors, so nothing changes.
    let full = Grid::from_alive(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
    assert_eq!(alive_neighbors(&full, 0, 0), 3);
    assert_eq!(next_generation(&full), full);
}

#[test]
fn test_edge_birth_does_not_wrap() {
    // Three cells along the right edge; wrapping would birth cells in column 0.
    let grid = Grid::from_alive(5, 5, &[(4, 1), (4, 2), (4, 3)]).unwrap();
    let next = next_generation(&grid);
    assert_eq!(alive_cells(&next), vec![(3, 2), (4, 2)]);
}

#[test]
fn test_next_generation_is_deterministic_and_pure() {
    let start = GLIDER.place(12, 12).unwrap();
    let snapshot = start.clone();

    let a = next_generation(&start);
    let b = next_generation(&start);
    assert_eq!(a, b);

    // Input read back independently is unchanged.
    assert_eq!(start, snapshot);
    for y in 0..start.height() {
        for x in 0..start.width() {
            assert_eq!(start.get(x, y), snapshot.get(x, y));
        }
    }
}
