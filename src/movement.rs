//! Movement rules: fixed offsets, jump moves, and distance truncation.

use crate::board::{BoardLocation, BoardVector};

/// Classifies a move for phase gating.
///
/// The battle only admits actions whose type matches the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Movement,
    Melee,
    Shooting,
}

/// A movement rule: a fixed offset plus a jump flag.
///
/// Jump moves ignore intervening distance and are resolved by callers that
/// do not supply a distance cap. Non-jump moves may be truncated to a travel
/// budget, modelling a piece that moves up to N squares along its line but
/// stops short when blocked or budget-limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    offset: BoardLocation,
    jump: bool,
}

impl Movement {
    pub fn new(offset: BoardLocation, jump: bool) -> Self {
        Movement { offset, jump }
    }

    /// Builds a movement rule from a direction/magnitude vector.
    pub fn from_vector(vector: BoardVector, jump: bool) -> Self {
        Movement {
            offset: vector.to_offset(),
            jump,
        }
    }

    pub fn offset(&self) -> BoardLocation {
        self.offset
    }

    pub fn jump(&self) -> bool {
        self.jump
    }

    /// The unconditional destination: `start + offset`, regardless of the
    /// jump flag or any distance budget.
    pub fn move_from(&self, start: BoardLocation) -> BoardLocation {
        start + self.offset
    }

    /// The destination under a travel budget.
    ///
    /// Jump moves are not distance-limited and return `start` unchanged;
    /// the caller resolves them through `move_from`. Otherwise the move's
    /// vector is truncated to `distance` squares when the budget is shorter
    /// than the move (a negative budget truncates to zero), and the
    /// truncated offset is applied.
    pub fn move_from_within(&self, start: BoardLocation, distance: i32) -> BoardLocation {
        if self.jump {
            return start;
        }
        let mut vector = BoardVector::from_offset(self.offset);
        if distance < vector.length() {
            vector = vector.with_length(distance);
        }
        start + vector.to_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MoveDirection;

    #[test]
    fn move_from_applies_full_offset() {
        let m = Movement::new(BoardLocation::new(2, -3), false);
        let dest = m.move_from(BoardLocation::new(10, 10));
        assert_eq!(dest, BoardLocation::new(12, 7));
    }

    #[test]
    fn move_from_ignores_jump_flag() {
        let m = Movement::new(BoardLocation::new(2, 2), true);
        assert_eq!(
            m.move_from(BoardLocation::ORIGIN),
            BoardLocation::new(2, 2)
        );
    }

    #[test]
    fn jump_moves_are_not_distance_limited() {
        let m = Movement::new(BoardLocation::new(5, 0), true);
        let start = BoardLocation::new(1, 1);
        assert_eq!(m.move_from_within(start, 2), start);
    }

    #[test]
    fn short_budget_truncates_travel() {
        let m = Movement::from_vector(
            BoardVector::new(MoveDirection::Right, 10),
            false,
        );
        let dest = m.move_from_within(BoardLocation::ORIGIN, 4);
        assert_eq!(dest, BoardLocation::new(4, 0));
    }

    #[test]
    fn truncated_offset_keeps_direction_and_magnitude() {
        for dir in MoveDirection::CARDINALS {
            let m = Movement::from_vector(BoardVector::new(dir, 9), false);
            let dest = m.move_from_within(BoardLocation::ORIGIN, 3);
            let travelled = BoardVector::from_offset(dest);
            assert_eq!(travelled.length(), 3, "{dir:?}");
            assert_eq!(travelled.direction(), dir, "{dir:?}");
        }
    }

    #[test]
    fn ample_budget_leaves_move_untouched() {
        let m = Movement::new(BoardLocation::new(0, 6), false);
        let dest = m.move_from_within(BoardLocation::ORIGIN, 6);
        assert_eq!(dest, BoardLocation::new(0, 6));
        let dest = m.move_from_within(BoardLocation::ORIGIN, 100);
        assert_eq!(dest, BoardLocation::new(0, 6));
    }

    #[test]
    fn negative_budget_means_no_movement() {
        let m = Movement::new(BoardLocation::new(0, 6), false);
        let start = BoardLocation::new(3, 3);
        assert_eq!(m.move_from_within(start, -1), start);
    }

    #[test]
    fn equality_covers_offset_and_jump() {
        let a = Movement::new(BoardLocation::new(1, 1), false);
        let b = Movement::new(BoardLocation::new(1, 1), false);
        let c = Movement::new(BoardLocation::new(1, 1), true);
        let d = Movement::new(BoardLocation::new(1, 2), false);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
