//! Turn and phase sequencing.
//!
//! The battle owns the phase/round/player counters and gates piece actions
//! against them. It never owns the board: the model is passed by reference
//! into each action, so the battle cannot outlive it and all mutation stays
//! with the enclosing game session.

use crate::board::Board;
use crate::movement::{MoveType, Movement};

/// The phase within a round, cycling Movement -> Melee -> Shooting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattlePhase {
    Movement,
    Melee,
    Shooting,
}

impl BattlePhase {
    /// The move type a player may act with during this phase.
    pub const fn allowed_move(self) -> MoveType {
        match self {
            BattlePhase::Movement => MoveType::Movement,
            BattlePhase::Melee => MoveType::Melee,
            BattlePhase::Shooting => MoveType::Shooting,
        }
    }

    const fn next(self) -> BattlePhase {
        match self {
            BattlePhase::Movement => BattlePhase::Melee,
            BattlePhase::Melee => BattlePhase::Shooting,
            BattlePhase::Shooting => BattlePhase::Movement,
        }
    }
}

/// A move submitted to the battle: the movement rule plus the phase it
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleMove {
    pub movement: Movement,
    pub move_type: MoveType,
}

/// The phase state machine for one battle.
///
/// Starts at Movement, round 0, player 0. There is no terminal state;
/// win/loss detection belongs to the enclosing session.
#[derive(Debug, Clone)]
pub struct Battle {
    phase: BattlePhase,
    round: u32,
    active_player: usize,
    player_count: usize,
}

impl Battle {
    /// Starts a battle for the given number of players (at least one).
    pub fn new(player_count: usize) -> Self {
        Battle {
            phase: BattlePhase::Movement,
            round: 0,
            active_player: 0,
            player_count: player_count.max(1),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn active_player(&self) -> usize {
        self.active_player
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Advances to the next phase.
    ///
    /// Wrapping past Shooting hands the turn to the next player; wrapping
    /// past the last player starts a new round with player 0.
    pub fn next(&mut self) {
        self.phase = self.phase.next();
        if self.phase == BattlePhase::Movement {
            if self.active_player == self.player_count - 1 {
                self.active_player = 0;
                self.round += 1;
            } else {
                self.active_player += 1;
            }
        }
    }

    /// Attempts a move for `player`'s piece at the square `from`.
    ///
    /// Returns false with no state change when it is not the player's turn,
    /// the move type does not match the current phase, the player has no
    /// piece at `from`, or the destination falls off the board. A movement
    /// action relocates the piece; melee and shooting actions only vet that
    /// an enemy occupies the target square, leaving destruction to the
    /// combat resolver. Rejection is an expected condition, never an error.
    pub fn action(
        &mut self,
        board: &mut Board,
        player: usize,
        from: (usize, usize),
        mv: BattleMove,
    ) -> bool {
        if player != self.active_player {
            return false;
        }
        if mv.move_type != self.phase.allowed_move() {
            return false;
        }
        match board.space(from.0, from.1) {
            Some(occ) if occ.player == player => {}
            _ => return false,
        }
        let Some(dest) = board.offset_from(from.0, from.1, mv.movement.offset()) else {
            return false;
        };
        match mv.move_type {
            MoveType::Movement => board.relocate(from, dest),
            MoveType::Melee | MoveType::Shooting => {
                matches!(board.space(dest.0, dest.1), Some(occ) if occ.player != player)
            }
        }
    }
}
