use rand::Rng;
use tracing::debug;

use crate::Coord;
use crate::engine;
use crate::grid::BitGrid;
use crate::grid::BoundaryPolicy;
use crate::grid::GridResult;

/// Which of the two owned grids holds the live generation.
///
/// A two-variant selector instead of a reassignable pointer: `current`
/// always names one of the pair, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Buffer {
    A,
    B,
}

impl Buffer {
    fn flip(self) -> Self {
        match self {
            Buffer::A => Buffer::B,
            Buffer::B => Buffer::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Buffer::A => 0,
            Buffer::B => 1,
        }
    }
}

/// A double-buffered Game of Life run.
///
/// Owns two grids of identical size and policy. [`GameSession::step`] writes
/// the next generation into the inactive grid and flips which one is live,
/// so stepping never allocates.
pub struct GameSession {
    grids: [BitGrid; 2],
    current: Buffer,
}

impl GameSession {
    /// Allocate both buffers, or neither: if the second allocation fails,
    /// the first is released on the way out of `?`.
    pub fn new(width: Coord, height: Coord, policy: BoundaryPolicy) -> GridResult<Self> {
        let a = BitGrid::new(width, height, policy)?;
        let b = BitGrid::new(width, height, policy)?;

        debug!(width, height, ?policy, "created session");

        Ok(Self {
            grids: [a, b],
            current: Buffer::A,
        })
    }

    /// The live generation, for renderers and inspection.
    pub fn current(&self) -> &BitGrid {
        &self.grids[self.current.index()]
    }

    /// Write access to the live generation, for seeding patterns.
    pub fn current_mut(&mut self) -> &mut BitGrid {
        &mut self.grids[self.current.index()]
    }

    /// Randomize the live generation. See [`BitGrid::randomize`].
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.current_mut().randomize(rng);
    }

    /// Advance one generation.
    ///
    /// The grid that was live before the call holds stale data afterwards
    /// and is silently overwritten by the next step, so callers must not
    /// hold on to it across steps.
    pub fn step(&mut self) {
        let [a, b] = &mut self.grids;

        match self.current {
            Buffer::A => engine::next_generation(a, b),
            Buffer::B => engine::next_generation(b, a),
        }

        self.current = self.current.flip();
    }
}
