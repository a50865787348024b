//! Melee exchanges, saving throws, charges, and ability resolution.

use crate::ability::{Ability, AbilityKind};
use crate::board::BoardLocation;
use crate::combat::dice::Dice;
use crate::piece::Piece;

/// The result of one melee exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeOutcome {
    DefenderDestroyed,
    AttackerDestroyed,
    NoEffect,
}

/// Rolls a saving throw for the piece.
///
/// A roll of 1 always fails (a fumble, applied before the stat comparison);
/// otherwise the roll must reach the piece's save value. A negative save
/// therefore makes saving strictly easier, which is deliberate.
pub fn make_save(piece: &Piece, dice: &mut impl Dice) -> bool {
    let roll = dice.d6() as i32;
    !(roll == 1 || roll < piece.save)
}

/// Resolves one melee exchange between attacker and defender.
///
/// `roll = attacker.melee - defender.melee + d6`, then the outcome table is
/// evaluated in fixed order, first match wins:
/// - above 5: defender destroyed outright
/// - exactly 5: defender survives only by passing two saving throws
///   (both are rolled even if the first fails, so dice consumption is
///   deterministic)
/// - exactly 4: defender survives only by passing one saving throw
/// - 2 to 3: no effect
/// - below 2: a scary attacker that fumbled against a brave defender is
///   itself destroyed unless it passes a save; anyone else shrugs it off
pub fn resolve_melee(attacker: &Piece, defender: &Piece, dice: &mut impl Dice) -> MeleeOutcome {
    let roll = attacker.melee - defender.melee + dice.d6() as i32;
    if roll > 5 {
        MeleeOutcome::DefenderDestroyed
    } else if roll == 5 {
        let first = make_save(defender, dice);
        let second = make_save(defender, dice);
        if first && second {
            MeleeOutcome::NoEffect
        } else {
            MeleeOutcome::DefenderDestroyed
        }
    } else if roll == 4 {
        if make_save(defender, dice) {
            MeleeOutcome::NoEffect
        } else {
            MeleeOutcome::DefenderDestroyed
        }
    } else if roll >= 2 {
        MeleeOutcome::NoEffect
    } else if attacker.scary && defender.brave && !make_save(attacker, dice) {
        MeleeOutcome::AttackerDestroyed
    } else {
        MeleeOutcome::NoEffect
    }
}

/// Attempts a charge by `charger` against `target`.
///
/// A non-brave charger must pass a save to close with a scary target;
/// every other pairing always succeeds.
pub fn charge(charger: &Piece, target: &Piece, dice: &mut impl Dice) -> bool {
    if !charger.brave && target.scary {
        make_save(charger, dice)
    } else {
        true
    }
}

/// Board cells struck by one ability use, for the board collaborator to
/// apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityEffect {
    /// (cell, damage) pairs in mask order; a directional ability yields a
    /// single pair.
    pub strikes: Vec<(BoardLocation, i32)>,
}

/// Spends one point from the ability's pool and computes the cells it
/// strikes from `origin`.
///
/// Returns `None` without spending when the pool is already exhausted.
/// Dispatches over the ability kind in one place; the shapes carry their
/// own payloads.
pub fn resolve_ability(ability: &mut Ability, origin: BoardLocation) -> Option<AbilityEffect> {
    if ability.pool.is_exhausted() {
        return None;
    }
    ability.pool.use_one();
    let strikes = match &ability.kind {
        AbilityKind::Directional { vector, damage } => {
            vec![(origin + vector.to_offset(), *damage)]
        }
        AbilityKind::Area { shape } => shape
            .affected()
            .map(|(offset, damage)| (origin + offset, damage))
            .collect(),
    };
    Some(AbilityEffect { strikes })
}
