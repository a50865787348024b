//! Combat resolution.
//!
//! Dice abstraction, saving throws, melee exchanges, and ability
//! resolution. Everything here is call-and-return over an injected dice
//! source so outcomes are deterministic under test.

pub mod dice;
pub mod melee;

pub use dice::{Dice, RngDice, ScriptedDice};
pub use melee::{charge, make_save, resolve_ability, resolve_melee, AbilityEffect, MeleeOutcome};
