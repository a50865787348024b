//! Abilities and their shared point economy.
//!
//! Every ability, whatever its shape, draws on the same reusable point
//! budget. The shapes themselves are a closed sum: a single-vector ranged
//! attack, or an area-of-effect mask over relative offsets. Resolution of an
//! ability against the board lives in the combat module.

use crate::board::{BoardLocation, BoardVector};

/// A reusable point budget shared by all ability variants.
///
/// Invariant: `points <= max_points`. Spending saturates at zero and never
/// errors; the name and maximum are configuration and are never touched by
/// the runtime operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityPool {
    name: String,
    max_points: u32,
    points: u32,
}

impl AbilityPool {
    /// Creates a full pool.
    pub fn new(name: impl Into<String>, max_points: u32) -> Self {
        AbilityPool {
            name: name.into(),
            max_points,
            points: max_points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    /// Points remaining this battle.
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_exhausted(&self) -> bool {
        self.points == 0
    }

    /// Spends up to `n` points, flooring at zero. Returns the new remaining
    /// count; over-spending is not an error.
    pub fn spend(&mut self, n: u32) -> u32 {
        self.points = self.points.saturating_sub(n);
        self.points
    }

    /// Spends a single point.
    pub fn use_one(&mut self) -> u32 {
        self.spend(1)
    }

    /// Restores the pool to its maximum. Idempotent.
    pub fn reset(&mut self) {
        self.points = self.max_points;
    }

    /// Readies the pool for a fresh battle. Only the runtime points are
    /// reset; name and maximum stay as configured.
    pub fn initialize(&mut self) {
        self.reset();
    }
}

/// A rectangular influence grid for area abilities.
///
/// Nonzero cells mark affected offsets relative to the mask centre; the
/// cell value is the damage applied there. Dimensions are caller-supplied
/// and validated only for rectangularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMask {
    cells: Vec<Vec<i32>>,
}

impl ShapeMask {
    /// Wraps a grid, returning `None` when the rows have unequal widths.
    pub fn new(cells: Vec<Vec<i32>>) -> Option<Self> {
        let width = cells.first().map_or(0, Vec::len);
        if cells.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(ShapeMask { cells })
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// The raw cell value at (column, row), or 0 outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> i32 {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }

    /// Immutable view over the full grid.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.cells
    }

    /// Iterates the nonzero cells as (offset from centre, damage) pairs.
    ///
    /// The centre is the integer midpoint of the grid, so odd dimensions
    /// centre exactly and even dimensions bias toward the low corner.
    pub fn affected(&self) -> impl Iterator<Item = (BoardLocation, i32)> + '_ {
        let cx = (self.width() / 2) as i32;
        let cy = (self.height() / 2) as i32;
        self.cells.iter().enumerate().flat_map(move |(y, row)| {
            row.iter().enumerate().filter_map(move |(x, &damage)| {
                if damage != 0 {
                    Some((BoardLocation::new(x as i32 - cx, y as i32 - cy), damage))
                } else {
                    None
                }
            })
        })
    }
}

/// The shape-specific payload of an ability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbilityKind {
    /// A ranged attack along a single vector, dealing `damage` at the
    /// target square.
    Directional { vector: BoardVector, damage: i32 },
    /// An area-of-effect shape applied around the origin square.
    Area { shape: ShapeMask },
}

/// An ability instance owned by a piece: point budget plus shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub pool: AbilityPool,
    pub kind: AbilityKind,
}

impl Ability {
    pub fn directional(
        name: impl Into<String>,
        max_points: u32,
        vector: BoardVector,
        damage: i32,
    ) -> Self {
        Ability {
            pool: AbilityPool::new(name, max_points),
            kind: AbilityKind::Directional { vector, damage },
        }
    }

    pub fn area(name: impl Into<String>, max_points: u32, shape: ShapeMask) -> Self {
        Ability {
            pool: AbilityPool::new(name, max_points),
            kind: AbilityKind::Area { shape },
        }
    }

    /// Readies the ability for a fresh battle; configuration is untouched.
    pub fn initialize(&mut self) {
        self.pool.initialize();
    }
}
