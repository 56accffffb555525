use std::fmt;

use super::moves::Move;
use super::piece::{Color, Piece, Type};
use crate::errors::Result;

/// Bounds check over signed coordinates, usable mid-offset-arithmetic
pub fn on_board(row: i32, col: i32) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// 8×8 mailbox board. Row 0 is black's back rank; row index increases toward
/// white's side of the board.
///
/// The board is a plain value: generation, evaluation and search copy it
/// before mutating, so a caller's snapshot is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Default for Board {
    /// Standard initial position
    fn default() -> Self {
        const BACK_RANK: [Type; 8] = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];

        let mut board = Self::empty();
        for col in 0..8 {
            board.squares[0][col] = Piece::new(Color::Black, BACK_RANK[col]);
            board.squares[1][col] = Piece::new(Color::Black, Type::Pawn);
            board.squares[6][col] = Piece::new(Color::White, Type::Pawn);
            board.squares[7][col] = Piece::new(Color::White, BACK_RANK[col]);
        }
        board
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[Piece::none(); 8]; 8],
        }
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Piece {
        self.squares[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, piece: Piece) {
        self.squares[row][col] = piece;
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.squares[row][col].is_none()
    }

    pub fn is_enemy(&self, row: usize, col: usize, color: Color) -> bool {
        let piece = self.squares[row][col];
        !piece.is_none() && piece.color != color
    }

    /// Relocate the piece and empty the origin square.
    ///
    /// Captures happen implicitly by overwriting the target. A pawn arriving
    /// on the far rank stays a pawn; promotion is only reported through
    /// detailed moves and handled by whoever owns the game flow.
    pub fn make_move(&mut self, mv: Move) {
        let (r1, c1) = mv.from;
        let (r2, c2) = mv.to;
        self.squares[r2][c2] = self.squares[r1][c1];
        self.squares[r1][c1] = Piece::none();
    }

    /// Copy of this board with `mv` applied
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        next.make_move(mv);
        next
    }

    /// Decode a snapshot in the two-character square-code convention
    /// (`"  "` empty, `"wP"`, `"bK"`, ...)
    pub fn from_rows(rows: &[[&str; 8]; 8]) -> Result<Board> {
        let mut board = Self::empty();
        for (row, codes) in rows.iter().enumerate() {
            for (col, code) in codes.iter().enumerate() {
                board.squares[row][col] = Piece::from_code(code)?;
            }
        }
        Ok(board)
    }

    /// Encode the position in the two-character square-code convention
    pub fn to_rows(&self) -> [[String; 8]; 8] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.squares[row][col].code()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a  b  c  d  e  f  g  h")?;
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for square in rank {
                if square.is_none() {
                    write!(f, ".. ")?;
                } else {
                    write!(f, "{} ", square.code())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
