//! Board occupancy grid.
//!
//! Stores one optional occupant per square, indexed by (rank, file). The
//! occupant is an index into the owning army's roster plus the controlling
//! player; pieces themselves are never copied onto the board. There is no
//! empty-square sentinel: an empty square is simply `None`.

use super::location::BoardLocation;

/// A piece reference on a square: roster index plus controlling player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub piece: usize,
    pub player: usize,
}

/// A rectangular grid of optional occupants.
///
/// All queries are total: out-of-bounds coordinates yield `None` or `false`
/// rather than panicking.
#[derive(Debug, Clone)]
pub struct Board {
    files: usize,
    ranks: usize,
    player_count: usize,
    squares: Vec<Option<Occupant>>,
}

impl Board {
    /// Creates an empty board. A game always has at least one player.
    pub fn new(files: usize, ranks: usize, player_count: usize) -> Self {
        Board {
            files,
            ranks,
            player_count: player_count.max(1),
            squares: vec![None; files * ranks],
        }
    }

    /// Number of columns.
    pub fn files(&self) -> usize {
        self.files
    }

    /// Number of rows.
    pub fn ranks(&self) -> usize {
        self.ranks
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    fn index(&self, rank: usize, file: usize) -> Option<usize> {
        if rank < self.ranks && file < self.files {
            Some(rank * self.files + file)
        } else {
            None
        }
    }

    /// The occupant of a square, or `None` if the square is empty or out of
    /// bounds.
    pub fn space(&self, rank: usize, file: usize) -> Option<Occupant> {
        self.squares[self.index(rank, file)?]
    }

    /// Places an occupant on an empty in-bounds square. Returns false and
    /// leaves the board unchanged otherwise.
    pub fn place(&mut self, rank: usize, file: usize, occupant: Occupant) -> bool {
        match self.index(rank, file) {
            Some(i) if self.squares[i].is_none() => {
                self.squares[i] = Some(occupant);
                true
            }
            _ => false,
        }
    }

    /// Clears a square, returning whatever occupied it.
    pub fn remove(&mut self, rank: usize, file: usize) -> Option<Occupant> {
        let i = self.index(rank, file)?;
        self.squares[i].take()
    }

    /// Moves the occupant at `from` to the empty square `to`.
    ///
    /// Fails (returning false, board unchanged) when `from` is empty or out
    /// of bounds, or `to` is occupied or out of bounds.
    pub fn relocate(&mut self, from: (usize, usize), to: (usize, usize)) -> bool {
        let Some(from_idx) = self.index(from.0, from.1) else {
            return false;
        };
        let Some(to_idx) = self.index(to.0, to.1) else {
            return false;
        };
        if from_idx == to_idx || self.squares[from_idx].is_none() || self.squares[to_idx].is_some()
        {
            return false;
        }
        self.squares[to_idx] = self.squares[from_idx].take();
        true
    }

    /// Applies an offset to a square, yielding the destination square if it
    /// stays on the board.
    pub fn offset_from(
        &self,
        rank: usize,
        file: usize,
        offset: BoardLocation,
    ) -> Option<(usize, usize)> {
        let rank = i64::try_from(rank).ok()? + i64::from(offset.y());
        let file = i64::try_from(file).ok()? + i64::from(offset.x());
        if rank < 0 || file < 0 {
            return None;
        }
        let (rank, file) = (rank as usize, file as usize);
        if rank < self.ranks && file < self.files {
            Some((rank, file))
        } else {
            None
        }
    }
}
