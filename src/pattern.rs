use crate::Coord;
use crate::grid::BitGrid;
use crate::grid::CellState;
use crate::grid::GridResult;

/// Gosper's glider gun, as `(x, y)` cells. Emits one glider every 30
/// generations. Needs a grid of at least 10 by 37 with room below for the
/// gliders to fly off.
///
/// See: https://conwaylife.com/wiki/Gosper_glider_gun
pub const GLIDER_GUN: &[(Coord, Coord)] = &[
    (1, 25),
    (2, 23),
    (2, 25),
    (3, 13),
    (3, 14),
    (3, 21),
    (3, 22),
    (3, 35),
    (3, 36),
    (4, 12),
    (4, 16),
    (4, 21),
    (4, 22),
    (4, 35),
    (4, 36),
    (5, 1),
    (5, 2),
    (5, 11),
    (5, 17),
    (5, 21),
    (5, 22),
    (6, 1),
    (6, 2),
    (6, 11),
    (6, 15),
    (6, 17),
    (6, 18),
    (6, 23),
    (6, 25),
    (7, 11),
    (7, 17),
    (7, 25),
    (8, 12),
    (8, 16),
    (9, 13),
    (9, 14),
];

/// Turn on every listed cell.
///
/// A coordinate outside the grid is a caller error: seeding stops at the
/// first [`GridError::OutOfBounds`] and the cells before it stay set.
///
/// [`GridError::OutOfBounds`]: crate::grid::GridError::OutOfBounds
pub fn seed(grid: &mut BitGrid, cells: &[(Coord, Coord)]) -> GridResult<()> {
    for &(x, y) in cells {
        grid.set(x, y, CellState::On)?;
    }

    Ok(())
}
