//! Piece identity and stats.

use crate::ability::Ability;
use serde::{Deserialize, Serialize};

/// The classical identity of a piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    #[default]
    Pawn,
}

/// A piece definition: identity, army-building stats, combat modifiers, and
/// its owned abilities.
///
/// `save` is compared directly against a d6 roll and may be negative, which
/// makes saving strictly easier. `scary` and `brave` modulate charges and
/// the fumble branch of melee resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub name: String,
    /// Maximum number of copies an army may field.
    pub max_count: u32,
    pub cost: u32,
    /// Travel budget in squares per movement phase.
    pub move_allowance: u32,
    pub save: i32,
    pub melee: i32,
    pub scary: bool,
    pub brave: bool,
    pub abilities: Vec<Ability>,
}

impl Default for Piece {
    /// The substitute entity used when persisted data cannot be decoded.
    fn default() -> Self {
        Piece {
            kind: PieceKind::default(),
            name: String::new(),
            max_count: 0,
            cost: 0,
            move_allowance: 0,
            save: 0,
            melee: 0,
            scary: false,
            brave: false,
            abilities: Vec::new(),
        }
    }
}

impl Piece {
    /// Creates a piece with the given identity and zeroed stats.
    pub fn new(kind: PieceKind, name: impl Into<String>) -> Self {
        Piece {
            kind,
            name: name.into(),
            ..Piece::default()
        }
    }

    /// Readies every owned ability for a fresh battle.
    pub fn initialize(&mut self) {
        for ability in &mut self.abilities {
            ability.initialize();
        }
    }
}
