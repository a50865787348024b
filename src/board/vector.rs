//! Direction/magnitude vectors and their conversion to square offsets.
//!
//! Conversion goes through f64 trigonometry with integer-cast truncation.
//! The four cardinal directions round-trip exactly for any length; diagonal
//! vectors produce rounded offsets and round-trip only approximately. The
//! truncation is load-bearing: ranged abilities are defined in whole squares
//! and the rest of the engine depends on these exact integer results.

use std::f64::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use super::location::{BoardLocation, BOARD_LIMIT};

/// One of eight compass directions spaced at 45 degrees.
///
/// The discriminant times pi/4 gives the angle in radians, with `Right` = 0
/// along positive X and the index increasing counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MoveDirection {
    Right = 0,
    ForwardRight = 1,
    Forward = 2,
    ForwardLeft = 3,
    Left = 4,
    BackwardLeft = 5,
    Backward = 6,
    BackwardRight = 7,
}

impl MoveDirection {
    /// All eight directions in discriminant order.
    pub const ALL: [MoveDirection; 8] = [
        MoveDirection::Right,
        MoveDirection::ForwardRight,
        MoveDirection::Forward,
        MoveDirection::ForwardLeft,
        MoveDirection::Left,
        MoveDirection::BackwardLeft,
        MoveDirection::Backward,
        MoveDirection::BackwardRight,
    ];

    /// The four axis-aligned directions, which convert losslessly.
    pub const CARDINALS: [MoveDirection; 4] = [
        MoveDirection::Right,
        MoveDirection::Forward,
        MoveDirection::Left,
        MoveDirection::Backward,
    ];

    /// The direction's angle in radians.
    pub fn angle(self) -> f64 {
        f64::from(self as u8) * FRAC_PI_4
    }

    /// Looks up a direction from an arbitrary integer index, wrapping
    /// modulo 8 (negative indices wrap upward).
    pub fn from_index(index: i32) -> MoveDirection {
        MoveDirection::ALL[index.rem_euclid(8) as usize]
    }

    /// Returns true for the axis-aligned directions.
    pub fn is_cardinal(self) -> bool {
        self as u8 % 2 == 0
    }
}

/// A direction plus a non-negative magnitude in squares.
///
/// The length is clamped to `[0, BOARD_LIMIT]` at every entry point; a
/// negative requested length becomes zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardVector {
    direction: MoveDirection,
    length: i32,
}

impl BoardVector {
    /// Creates a vector, silently clamping the length into `[0, BOARD_LIMIT]`.
    pub fn new(direction: MoveDirection, length: i32) -> Self {
        BoardVector {
            direction,
            length: length.clamp(0, BOARD_LIMIT),
        }
    }

    pub fn direction(self) -> MoveDirection {
        self.direction
    }

    pub fn length(self) -> i32 {
        self.length
    }

    /// Returns the same direction with a new (clamped) length.
    pub fn with_length(self, length: i32) -> Self {
        BoardVector::new(self.direction, length)
    }

    /// Converts the vector into a square offset.
    ///
    /// Each axis is `trig(angle) * length` cast to i32, truncating toward
    /// zero. Cardinal angles hit exact +-1/0 trig values so their offsets
    /// are exact; diagonals lose the fractional part by design.
    pub fn to_offset(self) -> BoardLocation {
        let angle = self.direction.angle();
        let len = f64::from(self.length);
        BoardLocation::new((angle.cos() * len) as i32, (angle.sin() * len) as i32)
    }

    /// Recovers a vector from a square offset.
    ///
    /// The length is the rounded Euclidean norm; the direction is
    /// `atan2(y, x)` scaled to eighth-turns and truncated to an index.
    /// Together with `to_offset` this is a double truncation, so
    /// round-tripping is exact only for cardinal vectors.
    pub fn from_offset(offset: BoardLocation) -> BoardVector {
        let x = f64::from(offset.x());
        let y = f64::from(offset.y());
        let length = x.hypot(y).round() as i32;
        let index = ((y.atan2(x) * 4.0 / PI + 8.0) % 8.0) as i32;
        BoardVector::new(MoveDirection::from_index(index), length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_angles_step_by_eighth_turns() {
        for (i, dir) in MoveDirection::ALL.iter().enumerate() {
            assert!((dir.angle() - i as f64 * FRAC_PI_4).abs() < 1e-12);
        }
    }

    #[test]
    fn from_index_wraps_both_directions() {
        assert_eq!(MoveDirection::from_index(8), MoveDirection::Right);
        assert_eq!(MoveDirection::from_index(9), MoveDirection::ForwardRight);
        assert_eq!(MoveDirection::from_index(-1), MoveDirection::BackwardRight);
        assert_eq!(MoveDirection::from_index(-2), MoveDirection::Backward);
    }

    #[test]
    fn cardinal_offsets_are_exact() {
        let cases = [
            (MoveDirection::Right, (5, 0)),
            (MoveDirection::Forward, (0, 5)),
            (MoveDirection::Left, (-5, 0)),
            (MoveDirection::Backward, (0, -5)),
        ];
        for (dir, (x, y)) in cases {
            let offset = BoardVector::new(dir, 5).to_offset();
            assert_eq!((offset.x(), offset.y()), (x, y), "{dir:?}");
        }
    }

    #[test]
    fn diagonal_offsets_truncate() {
        // 10 / sqrt(2) = 7.07..., truncated to 7 on both axes.
        let offset = BoardVector::new(MoveDirection::ForwardRight, 10).to_offset();
        assert_eq!((offset.x(), offset.y()), (7, 7));

        let offset = BoardVector::new(MoveDirection::BackwardLeft, 10).to_offset();
        assert_eq!((offset.x(), offset.y()), (-7, -7));
    }

    #[test]
    fn cardinal_round_trip_is_exact() {
        for dir in MoveDirection::CARDINALS {
            for length in [0, 1, 2, 10, 1000, BOARD_LIMIT] {
                let v = BoardVector::new(dir, length);
                let back = BoardVector::from_offset(v.to_offset());
                assert_eq!(back.length(), length, "{dir:?} length {length}");
                if length > 0 {
                    assert_eq!(back.direction(), dir, "length {length}");
                }
            }
        }
    }

    #[test]
    fn from_offset_recovers_diagonal_direction() {
        let v = BoardVector::from_offset(BoardLocation::new(7, 7));
        assert_eq!(v.direction(), MoveDirection::ForwardRight);
        // hypot(7, 7) = 9.899..., rounded up to 10.
        assert_eq!(v.length(), 10);
    }

    #[test]
    fn from_offset_negative_axes() {
        let v = BoardVector::from_offset(BoardLocation::new(0, -9));
        assert_eq!(v.direction(), MoveDirection::Backward);
        assert_eq!(v.length(), 9);

        let v = BoardVector::from_offset(BoardLocation::new(-3, 0));
        assert_eq!(v.direction(), MoveDirection::Left);
        assert_eq!(v.length(), 3);
    }

    #[test]
    fn zero_offset_maps_to_zero_vector() {
        let v = BoardVector::from_offset(BoardLocation::ORIGIN);
        assert_eq!(v.length(), 0);
        assert_eq!(v.to_offset(), BoardLocation::ORIGIN);
    }

    #[test]
    fn negative_length_clamps_to_zero() {
        let v = BoardVector::new(MoveDirection::Forward, -17);
        assert_eq!(v.length(), 0);
        assert_eq!(v.to_offset(), BoardLocation::ORIGIN);
    }

    #[test]
    fn oversized_length_clamps_to_board_limit() {
        let v = BoardVector::new(MoveDirection::Right, i32::MAX);
        assert_eq!(v.length(), BOARD_LIMIT);
    }

    #[test]
    fn with_length_keeps_direction() {
        let v = BoardVector::new(MoveDirection::ForwardLeft, 9).with_length(4);
        assert_eq!(v.direction(), MoveDirection::ForwardLeft);
        assert_eq!(v.length(), 4);
    }
}
