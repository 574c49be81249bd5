use crate::Coord;
use crate::grid::BitGrid;
use crate::grid::CellState;

/// Offsets of the 8 surrounding cells.
const NEIGHBORS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Write the next generation of `src` into `dest` under the classic B3/S23
/// rule.
///
/// Every cell of `dest` is overwritten, nothing stale survives. Neighbor
/// reads go through [`BitGrid::get`], so the source's boundary policy
/// (including toroidal wraparound) applies transparently.
///
/// `src` and `dest` must share width, height and policy; [`GameSession`]
/// guarantees this by owning a matched pair.
///
/// [`GameSession`]: crate::session::GameSession
pub fn next_generation(src: &BitGrid, dest: &mut BitGrid) {
    debug_assert_eq!(src.width(), dest.width());
    debug_assert_eq!(src.height(), dest.height());
    debug_assert_eq!(src.policy(), dest.policy());

    for x in 0..src.width() {
        for y in 0..src.height() {
            let state = match (src.get(x, y), count_neighbors(src, x, y)) {
                (CellState::On, 2 | 3) => CellState::On, // survival
                (CellState::Off, 3) => CellState::On,    // birth
                _ => CellState::Off,                     // death, or stays dead
            };

            let Some(loc) = dest.resolve(x, y) else {
                unreachable!("the loop visits in-bounds cells only")
            };

            dest.put(loc, state);
        }
    }
}

fn count_neighbors(grid: &BitGrid, x: Coord, y: Coord) -> u8 {
    let mut count = 0;

    for (dx, dy) in NEIGHBORS {
        if grid.get(x + dx, y + dy).is_on() {
            count += 1;
        }
    }

    count
}
