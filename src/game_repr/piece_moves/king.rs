use super::super::board::{on_board, Board};
use super::super::moves::{Move, MoveList};

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Generate king moves into a provided buffer. No castling.
    pub(crate) fn king_moves_into(&self, row: usize, col: usize, moves: &mut MoveList) {
        let color = self.piece_at(row, col).color;

        for &(dr, dc) in &KING_OFFSETS {
            let (r, c) = (row as i32 + dr, col as i32 + dc);
            if on_board(r, c)
                && (self.is_empty(r as usize, c as usize)
                    || self.is_enemy(r as usize, c as usize, color))
            {
                moves.push(Move::new((row, col), (r as usize, c as usize)));
            }
        }
    }
}
