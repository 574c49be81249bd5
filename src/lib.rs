pub mod app;
pub mod engine;
pub mod grid;
pub mod pattern;
pub mod render;
pub mod session;

/// A logical cell coordinate along either axis.
///
/// Coordinates are signed: neighbor arithmetic and toroidal wraparound
/// produce values outside `[0, width) x [0, height)` all the time.
pub type Coord = i64;
