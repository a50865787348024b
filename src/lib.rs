//! Chesswar rules engine library.
//!
//! Exposes the board geometry, movement rules, ability economy, combat
//! resolution, and turn/phase sequencing for use by front-end layers and
//! integration tests. Rendering, input handling, and match bookkeeping live
//! outside this crate and call in through the board and battle interfaces.

pub mod ability;
pub mod battle;
pub mod board;
pub mod combat;
pub mod movement;
pub mod piece;
pub mod roster;
