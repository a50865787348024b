//! Dice abstraction.
//!
//! Combat takes its dice as `&mut impl Dice` so tests can script exact
//! rolls while production wiring draws from a small fast RNG, seeded from
//! entropy by default or from a fixed seed for reproducible games.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform die rolls.
pub trait Dice {
    /// Rolls one die, uniform over `[1, sides]` inclusive on both ends.
    /// A die with zero sides still yields 1 so rolling stays total.
    fn roll(&mut self, sides: u32) -> u32;

    /// A standard six-sided roll.
    fn d6(&mut self) -> u32 {
        self.roll(6)
    }
}

/// Production dice backed by `SmallRng`.
#[derive(Debug, Clone)]
pub struct RngDice {
    rng: SmallRng,
}

impl RngDice {
    /// Dice seeded from system entropy.
    pub fn from_entropy() -> Self {
        RngDice {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Dice with a fixed seed, for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        RngDice {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Dice for RngDice {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 1;
        }
        self.rng.gen_range(1..=sides)
    }
}

/// Scripted dice for deterministic tests.
///
/// Returns queued rolls in order, clamped into the requested die's range;
/// an exhausted queue yields 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        ScriptedDice {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Queues one more roll.
    pub fn push(&mut self, roll: u32) {
        self.rolls.push_back(roll);
    }

    /// Rolls still queued.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rolls
            .pop_front()
            .unwrap_or(1)
            .clamp(1, sides.max(1))
    }
}
