//! Board representation and coordinate types.
//!
//! Contains the clamped coordinate/vector math and the occupancy grid that
//! the movement, combat, and battle modules build on.

pub mod grid;
pub mod location;
pub mod vector;

pub use grid::{Board, Occupant};
pub use location::{BoardLocation, BOARD_LIMIT};
pub use vector::{BoardVector, MoveDirection};
