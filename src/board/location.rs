//! Clamped integer board coordinates.
//!
//! `BoardLocation` is the offset/position value type used throughout the
//! engine. Coordinates saturate at `BOARD_LIMIT` instead of erroring, so
//! location arithmetic is total: any sum of in-range locations is itself a
//! valid location.

use std::ops::{Add, Neg};

/// Maximum absolute coordinate or vector length before clamping.
///
/// Chosen as the integer part of sqrt(2^31 - 1) so that a squared-distance
/// computation over two clamped coordinates cannot overflow an i64.
pub const BOARD_LIMIT: i32 = 46_340;

/// An (x, y) offset or absolute position on the board.
///
/// Immutable value type: every operation returns a fresh location with both
/// axes independently clamped to `[-BOARD_LIMIT, BOARD_LIMIT]`. Fields are
/// private so the clamp invariant cannot be bypassed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoardLocation {
    x: i32,
    y: i32,
}

/// Clamps a widened axis value back into board range.
fn clamp_axis(v: i64) -> i32 {
    v.clamp(-i64::from(BOARD_LIMIT), i64::from(BOARD_LIMIT)) as i32
}

impl BoardLocation {
    /// The board origin, (0, 0).
    pub const ORIGIN: BoardLocation = BoardLocation { x: 0, y: 0 };

    /// Creates a location, silently clamping each axis into board range.
    pub fn new(x: i32, y: i32) -> Self {
        BoardLocation {
            x: clamp_axis(i64::from(x)),
            y: clamp_axis(i64::from(y)),
        }
    }

    /// The X coordinate, positive toward `MoveDirection::Right`.
    pub fn x(self) -> i32 {
        self.x
    }

    /// The Y coordinate, positive toward `MoveDirection::Forward`.
    pub fn y(self) -> i32 {
        self.y
    }
}

impl Add for BoardLocation {
    type Output = BoardLocation;

    /// Componentwise sum, widened to i64 so the clamp is applied to the
    /// true sum rather than a wrapped one.
    fn add(self, rhs: BoardLocation) -> BoardLocation {
        BoardLocation {
            x: clamp_axis(i64::from(self.x) + i64::from(rhs.x)),
            y: clamp_axis(i64::from(self.y) + i64::from(rhs.y)),
        }
    }
}

impl Neg for BoardLocation {
    type Output = BoardLocation;

    fn neg(self) -> BoardLocation {
        // Fields are already within the symmetric clamp range, so negation
        // cannot overflow.
        BoardLocation {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(i32, i32)> for BoardLocation {
    fn from((x, y): (i32, i32)) -> Self {
        BoardLocation::new(x, y)
    }
}

impl From<BoardLocation> for (i32, i32) {
    fn from(loc: BoardLocation) -> Self {
        (loc.x, loc.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_both_axes() {
        let loc = BoardLocation::new(i32::MAX, i32::MIN);
        assert_eq!(loc.x(), BOARD_LIMIT);
        assert_eq!(loc.y(), -BOARD_LIMIT);
    }

    #[test]
    fn in_range_values_pass_through() {
        let loc = BoardLocation::new(-12, 7);
        assert_eq!(loc.x(), -12);
        assert_eq!(loc.y(), 7);
    }

    #[test]
    fn add_is_componentwise() {
        let a = BoardLocation::new(3, -4);
        let b = BoardLocation::new(10, 20);
        assert_eq!(a + b, BoardLocation::new(13, 16));
    }

    #[test]
    fn add_clamps_each_axis_independently() {
        // Extreme inputs clamp at construction, then the sums clamp again.
        let a = BoardLocation::new(2_147_483_647, 0);
        let b = BoardLocation::new(0, 2_147_483_647);
        let sum = a + b;
        assert_eq!(sum.x(), BOARD_LIMIT);
        assert_eq!(sum.y(), BOARD_LIMIT);

        let c = BoardLocation::new(-2_147_483_648, 0);
        let d = BoardLocation::new(0, -2_147_483_648);
        let neg_sum = c + d;
        assert_eq!(neg_sum.x(), -BOARD_LIMIT);
        assert_eq!(neg_sum.y(), -BOARD_LIMIT);
    }

    #[test]
    fn add_saturates_at_boundary() {
        let edge = BoardLocation::new(BOARD_LIMIT, BOARD_LIMIT);
        let step = BoardLocation::new(1, 1);
        assert_eq!(edge + step, edge);
    }

    #[test]
    fn add_then_subtract_round_trips_away_from_boundary() {
        // (a + b) + (-b) == a whenever neither partial sum saturates.
        let cases = [
            (BoardLocation::new(0, 0), BoardLocation::new(5, -3)),
            (BoardLocation::new(100, -200), BoardLocation::new(-40, 99)),
            (BoardLocation::new(-1000, 1000), BoardLocation::new(999, -999)),
        ];
        for (a, b) in cases {
            assert_eq!((a + b) + (-b), a);
        }
    }

    #[test]
    fn neg_negates_both_axes() {
        let loc = BoardLocation::new(8, -15);
        assert_eq!(-loc, BoardLocation::new(-8, 15));
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(BoardLocation::default(), BoardLocation::ORIGIN);
    }

    #[test]
    fn tuple_conversion_clamps() {
        let loc: BoardLocation = (i32::MAX, 5).into();
        assert_eq!(<(i32, i32)>::from(loc), (BOARD_LIMIT, 5));
    }
}
