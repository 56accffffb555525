use std::fmt;

use smallvec::SmallVec;

use super::piece::Type;

/// Move buffer sized for the common case; spills to the heap for busy boards
pub type MoveList = SmallVec<[Move; 64]>;

/// A move as an ordered pair of (row, col) board coordinates.
///
/// No castling or en-passant flags exist in this move set; every move is a
/// plain piece relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

impl Move {
    pub fn new(from: (usize, usize), to: (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    /// Algebraic rendering, e.g. `e2e4`. Row 0 is rank 8.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            (b'a' + self.from.1 as u8) as char,
            8 - self.from.0,
            (b'a' + self.to.1 as u8) as char,
            8 - self.to.0,
        )
    }
}

/// A legal move annotated with what it does to the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedMove {
    pub mv: Move,
    /// Kind of the moving piece
    pub piece: Type,
    pub is_capture: bool,
    /// Pawn arriving on the farthest rank for its color
    pub is_promotion: bool,
    /// Applying the move leaves the opponent's king attacked
    pub gives_check: bool,
}
