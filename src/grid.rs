use rand::Rng;
use thiserror::Error;

use crate::Coord;

/// Cells are packed along the y axis, one bit each, [`BITS_PER_WORD`] to a
/// storage word. The x axis is never packed.
const BITS_PER_WORD: Coord = u8::BITS as Coord;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid size ({width}, {height}), sizes must be nonnegative")]
    InvalidDimension { width: Coord, height: Coord },

    #[error("Could not allocate storage for a {width} by {height} grid")]
    AllocationFailure { width: Coord, height: Coord },

    #[error("Cell ({x}, {y}) is out of bounds and not settable")]
    OutOfBounds { x: Coord, y: Coord },
}

/// What a read outside `[0, width) x [0, height)` sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Out-of-bounds cells read as [`CellState::Off`]
    AllOff,

    /// Out-of-bounds cells read as [`CellState::On`]
    AllOn,

    /// Coordinates wrap around both axes, so every read lands on a real cell
    Torus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Off,
    On,
}

impl CellState {
    pub fn is_on(self) -> bool {
        matches!(self, CellState::On)
    }
}

/// Storage word and bit offset of one in-bounds cell.
///
/// Only [`BitGrid::resolve`] builds these; no other code computes word or
/// bit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellLocation {
    word: usize,
    bit: u32,
}

/// One generation of cells, bit-packed.
///
/// The grid is `width` cells along x and `height` cells along y, backed by
/// `width * ceil(height / 8)` words. It is never resized after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    /// Flat, row-contiguous storage: the words of row x start at
    /// `x * row_words`.
    words: Vec<u8>,

    width: Coord,
    height: Coord,

    /// Words per x row: `ceil(height / BITS_PER_WORD)`
    row_words: usize,

    policy: BoundaryPolicy,
}

impl BitGrid {
    /// Create a grid with every cell [`CellState::Off`].
    ///
    /// Negative dimensions are rejected. A zero dimension is fine, the grid
    /// just has no cells. Failure to obtain storage is reported, not an
    /// abort.
    pub fn new(width: Coord, height: Coord, policy: BoundaryPolicy) -> GridResult<Self> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let row_words = (height as usize).div_ceil(BITS_PER_WORD as usize);

        let Some(len) = (width as usize).checked_mul(row_words) else {
            return Err(GridError::AllocationFailure { width, height });
        };

        let mut words = Vec::new();
        if words.try_reserve_exact(len).is_err() {
            return Err(GridError::AllocationFailure { width, height });
        }
        words.resize(len, 0);

        Ok(Self {
            words,
            width,
            height,
            row_words,
            policy,
        })
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Resolve a logical coordinate to its storage location.
    ///
    /// In-bounds coordinates always resolve. Out-of-bounds coordinates
    /// resolve under [`BoundaryPolicy::Torus`] by wrapping with a
    /// nonnegative-remainder modulo, which reduces any sign and any number
    /// of wraps into `[0, width) x [0, height)`. A truncating modulo would
    /// hand negative coordinates a negative index, so `rem_euclid` it is.
    /// Under the other policies out-of-bounds coordinates have no location.
    pub(crate) fn resolve(&self, x: Coord, y: Coord) -> Option<CellLocation> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            // y may come out of wraparound arithmetic, so divide toward
            // negative infinity rather than truncating.
            let word_in_row = y.div_euclid(BITS_PER_WORD) as usize;
            let bit = y.rem_euclid(BITS_PER_WORD) as u32;

            let word = (x as usize) * self.row_words + word_in_row;

            return Some(CellLocation { word, bit });
        }

        match self.policy {
            // A torus with a zero dimension has no cell to wrap onto.
            BoundaryPolicy::Torus if self.width > 0 && self.height > 0 => {
                self.resolve(x.rem_euclid(self.width), y.rem_euclid(self.height))
            }
            _ => None,
        }
    }

    /// Read one cell. Never fails: unaddressable coordinates synthesize a
    /// state from the boundary policy.
    pub fn get(&self, x: Coord, y: Coord) -> CellState {
        let Some(loc) = self.resolve(x, y) else {
            return match self.policy {
                BoundaryPolicy::AllOn => CellState::On,
                // AllOff, or a torus with a zero dimension
                _ => CellState::Off,
            };
        };

        if self.words[loc.word] & (1 << loc.bit) == 0 {
            CellState::Off
        } else {
            CellState::On
        }
    }

    /// Write one cell.
    ///
    /// Out-of-bounds coordinates fail with [`GridError::OutOfBounds`] under
    /// every policy. Wraparound is a read-time convenience only; a write
    /// must name a real cell.
    pub fn set(&mut self, x: Coord, y: Coord, state: CellState) -> GridResult<()> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds { x, y });
        }

        let Some(loc) = self.resolve(x, y) else {
            unreachable!("in-bounds coordinates always resolve")
        };

        self.put(loc, state);

        Ok(())
    }

    /// Write a resolved location. Infallible counterpart of [`BitGrid::set`]
    /// for loops that already hold a location.
    pub(crate) fn put(&mut self, loc: CellLocation, state: CellState) {
        let mask = 1u8 << loc.bit;

        match state {
            CellState::On => self.words[loc.word] |= mask,
            CellState::Off => self.words[loc.word] &= !mask,
        }
    }

    /// Set every cell independently to `On` or `Off` with probability one
    /// half, one draw per cell.
    ///
    /// The source of randomness is the caller's: pass a seeded rng for
    /// reproducible grids.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for x in 0..self.width {
            for y in 0..self.height {
                let state = if rng.gen_bool(0.5) {
                    CellState::On
                } else {
                    CellState::Off
                };

                let Some(loc) = self.resolve(x, y) else {
                    unreachable!("in-bounds coordinates always resolve")
                };

                self.put(loc, state);
            }
        }
    }

    /// Ordered iteration over the grid for renderers: rows run along the x
    /// axis top to bottom, cells within a row along the y axis left to
    /// right. States only, formatting belongs to the caller.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        (0..self.width).map(move |x| (0..self.height).map(move |y| self.get(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_are_rejected() {
        let res = BitGrid::new(-1, 5, BoundaryPolicy::AllOff);

        assert_eq!(
            res.unwrap_err(),
            GridError::InvalidDimension {
                width: -1,
                height: 5
            }
        );
    }

    #[test]
    fn new_grid_is_all_off() {
        let grid = BitGrid::new(4, 20, BoundaryPolicy::AllOff).unwrap();

        for x in 0..4 {
            for y in 0..20 {
                assert_eq!(grid.get(x, y), CellState::Off);
            }
        }
    }

    #[test]
    fn resolve_packs_eight_cells_per_word() {
        let grid = BitGrid::new(2, 20, BoundaryPolicy::AllOff).unwrap();

        // 20 cells along y need 3 words per row.
        assert_eq!(grid.row_words, 3);

        assert_eq!(grid.resolve(0, 0), Some(CellLocation { word: 0, bit: 0 }));
        assert_eq!(grid.resolve(0, 7), Some(CellLocation { word: 0, bit: 7 }));
        assert_eq!(grid.resolve(0, 8), Some(CellLocation { word: 1, bit: 0 }));
        assert_eq!(grid.resolve(0, 19), Some(CellLocation { word: 2, bit: 3 }));
        assert_eq!(grid.resolve(1, 0), Some(CellLocation { word: 3, bit: 0 }));
    }

    #[test]
    fn read_after_write() {
        let mut grid = BitGrid::new(3, 17, BoundaryPolicy::AllOff).unwrap();

        grid.set(2, 16, CellState::On).unwrap();
        assert_eq!(grid.get(2, 16), CellState::On);

        // Neighbors within the same word are untouched.
        assert_eq!(grid.get(2, 15), CellState::Off);

        grid.set(2, 16, CellState::Off).unwrap();
        assert_eq!(grid.get(2, 16), CellState::Off);
    }

    #[test]
    fn set_out_of_bounds_fails_under_every_policy() {
        for policy in [
            BoundaryPolicy::AllOff,
            BoundaryPolicy::AllOn,
            BoundaryPolicy::Torus,
        ] {
            let mut grid = BitGrid::new(4, 4, policy).unwrap();

            let res = grid.set(-1, 0, CellState::On);
            assert_eq!(res.unwrap_err(), GridError::OutOfBounds { x: -1, y: 0 });

            let res = grid.set(0, 4, CellState::On);
            assert_eq!(res.unwrap_err(), GridError::OutOfBounds { x: 0, y: 4 });
        }
    }

    #[test]
    fn torus_reads_wrap_with_any_sign_and_magnitude() {
        let mut grid = BitGrid::new(5, 7, BoundaryPolicy::Torus).unwrap();

        grid.set(4, 0, CellState::On).unwrap();
        grid.set(0, 6, CellState::On).unwrap();

        assert_eq!(grid.get(-1, 0), CellState::On);
        assert_eq!(grid.get(9, 0), CellState::On);
        assert_eq!(grid.get(-11, 0), CellState::On);

        assert_eq!(grid.get(0, -1), CellState::On);
        assert_eq!(grid.get(0, 13), CellState::On);

        assert_eq!(grid.get(5, 0), CellState::Off);
        assert_eq!(grid.get(10, 0), grid.get(0, 0));
    }

    #[test]
    fn boundary_policies_synthesize_out_of_bounds_reads() {
        let off = BitGrid::new(3, 3, BoundaryPolicy::AllOff).unwrap();
        let on = BitGrid::new(3, 3, BoundaryPolicy::AllOn).unwrap();

        assert_eq!(off.get(-1, -1), CellState::Off);
        assert_eq!(on.get(-1, -1), CellState::On);
        assert_eq!(on.get(3, 100), CellState::On);

        // In-bounds reads are unaffected by AllOn.
        assert_eq!(on.get(0, 0), CellState::Off);
    }

    #[test]
    fn zero_dimension_torus_reads_off() {
        let grid = BitGrid::new(0, 8, BoundaryPolicy::Torus).unwrap();

        assert_eq!(grid.get(0, 0), CellState::Off);
        assert_eq!(grid.get(-3, 5), CellState::Off);
    }

    #[test]
    fn randomize_is_reproducible_from_the_seed() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut a = BitGrid::new(6, 11, BoundaryPolicy::Torus).unwrap();
        let mut b = BitGrid::new(6, 11, BoundaryPolicy::Torus).unwrap();

        a.randomize(&mut StdRng::seed_from_u64(42));
        b.randomize(&mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn rows_iterate_x_major() {
        let mut grid = BitGrid::new(2, 3, BoundaryPolicy::AllOff).unwrap();
        grid.set(1, 2, CellState::On).unwrap();

        let rows: Vec<Vec<CellState>> = grid.rows().map(|row| row.collect()).collect();

        assert_eq!(
            rows,
            vec![
                vec![CellState::Off, CellState::Off, CellState::Off],
                vec![CellState::Off, CellState::Off, CellState::On],
            ]
        );
    }
}
