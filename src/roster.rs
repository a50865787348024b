//! Army roster persistence.
//!
//! The canonical on-disk schema is a JSON array of piece records with
//! PascalCase field names:
//!
//! ```json
//! {
//!     "Kind": "Knight", "Name": "Temple Knight",
//!     "Max": 4, "Cost": 30, "Move": 2, "Save": 3, "Melee": 1,
//!     "Scary": false, "Brave": true,
//!     "Specials": [
//!         { "Shape": "Directional", "Name": "lance", "Points": 1,
//!           "Direction": "Forward", "Length": 2, "Damage": 1 },
//!         { "Shape": "Area", "Name": "blast", "Points": 1,
//!           "Grid": [[0, 1, 0], [1, 1, 1], [0, 1, 0]] }
//!     ]
//! }
//! ```
//!
//! Ability sub-records are tagged by `Shape`. Loading reconstructs every
//! ability at full points: the roster stores configuration, not battle
//! state. The lenient loader substitutes a default-constructed piece for
//! each malformed entry; reporting the substitution is the caller's
//! concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ability::{Ability, AbilityKind, ShapeMask};
use crate::board::{BoardVector, MoveDirection};
use crate::piece::{Piece, PieceKind};

/// Errors that can occur when encoding or decoding a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("malformed roster document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("ability '{0}' has a ragged area grid")]
    RaggedGrid(String),
}

fn default_direction() -> MoveDirection {
    MoveDirection::Right
}

/// One ability entry inside a piece record.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "Shape")]
enum SpecialRecord {
    Directional {
        #[serde(rename = "Name", default)]
        name: String,
        #[serde(rename = "Points", default)]
        points: u32,
        #[serde(rename = "Direction", default = "default_direction")]
        direction: MoveDirection,
        #[serde(rename = "Length", default)]
        length: i32,
        #[serde(rename = "Damage", default)]
        damage: i32,
    },
    Area {
        #[serde(rename = "Name", default)]
        name: String,
        #[serde(rename = "Points", default)]
        points: u32,
        #[serde(rename = "Grid", default)]
        grid: Vec<Vec<i32>>,
    },
}

/// One piece entry in the roster document.
#[derive(Debug, Serialize, Deserialize)]
struct PieceRecord {
    #[serde(rename = "Kind", default)]
    kind: PieceKind,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Max", default)]
    max: u32,
    #[serde(rename = "Cost", default)]
    cost: u32,
    #[serde(rename = "Move", default)]
    move_allowance: u32,
    #[serde(rename = "Save", default)]
    save: i32,
    #[serde(rename = "Melee", default)]
    melee: i32,
    #[serde(rename = "Scary", default)]
    scary: bool,
    #[serde(rename = "Brave", default)]
    brave: bool,
    #[serde(rename = "Specials", default)]
    specials: Vec<SpecialRecord>,
}

impl From<&Ability> for SpecialRecord {
    fn from(ability: &Ability) -> Self {
        let name = ability.pool.name().to_string();
        let points = ability.pool.max_points();
        match &ability.kind {
            AbilityKind::Directional { vector, damage } => SpecialRecord::Directional {
                name,
                points,
                direction: vector.direction(),
                length: vector.length(),
                damage: *damage,
            },
            AbilityKind::Area { shape } => SpecialRecord::Area {
                name,
                points,
                grid: shape.rows().to_vec(),
            },
        }
    }
}

impl TryFrom<SpecialRecord> for Ability {
    type Error = RosterError;

    fn try_from(record: SpecialRecord) -> Result<Self, RosterError> {
        match record {
            SpecialRecord::Directional {
                name,
                points,
                direction,
                length,
                damage,
            } => Ok(Ability::directional(
                name,
                points,
                BoardVector::new(direction, length),
                damage,
            )),
            SpecialRecord::Area { name, points, grid } => {
                let shape = ShapeMask::new(grid).ok_or_else(|| RosterError::RaggedGrid(name.clone()))?;
                Ok(Ability::area(name, points, shape))
            }
        }
    }
}

impl From<&Piece> for PieceRecord {
    fn from(piece: &Piece) -> Self {
        PieceRecord {
            kind: piece.kind,
            name: piece.name.clone(),
            max: piece.max_count,
            cost: piece.cost,
            move_allowance: piece.move_allowance,
            save: piece.save,
            melee: piece.melee,
            scary: piece.scary,
            brave: piece.brave,
            specials: piece.abilities.iter().map(SpecialRecord::from).collect(),
        }
    }
}

impl TryFrom<PieceRecord> for Piece {
    type Error = RosterError;

    fn try_from(record: PieceRecord) -> Result<Self, RosterError> {
        let abilities = record
            .specials
            .into_iter()
            .map(Ability::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Piece {
            kind: record.kind,
            name: record.name,
            max_count: record.max,
            cost: record.cost,
            move_allowance: record.move_allowance,
            save: record.save,
            melee: record.melee,
            scary: record.scary,
            brave: record.brave,
            abilities,
        })
    }
}

/// Encodes a roster into the canonical JSON document.
pub fn encode_roster(pieces: &[Piece]) -> Result<String, RosterError> {
    let records: Vec<PieceRecord> = pieces.iter().map(PieceRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Decodes a roster document, failing on the first malformed entry.
pub fn parse_roster(input: &str) -> Result<Vec<Piece>, RosterError> {
    let records: Vec<PieceRecord> = serde_json::from_str(input)?;
    records.into_iter().map(Piece::try_from).collect()
}

/// Decodes a roster document, substituting a default-constructed piece for
/// each entry that cannot be decoded.
///
/// Only an unreadable top-level document is an error; there is nothing left
/// to substitute at that point.
pub fn parse_roster_lenient(input: &str) -> Result<Vec<Piece>, RosterError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(input)?;
    Ok(entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<PieceRecord>(entry)
                .map_err(RosterError::from)
                .and_then(Piece::try_from)
                .unwrap_or_default()
        })
        .collect())
}
