use super::super::board::{on_board, Board};
use super::super::moves::{Move, MoveList};
use super::super::piece::Color;

impl Board {
    /// Generate pawn moves into a provided buffer.
    ///
    /// Single push into an empty square, double push from the start row when
    /// both intervening squares are empty, and diagonal captures only onto
    /// enemy-occupied squares. No en-passant.
    pub(crate) fn pawn_moves_into(&self, row: usize, col: usize, moves: &mut MoveList) {
        let color = self.piece_at(row, col).color;

        // White advances toward row 0, black toward row 7
        let (dir, start_row) = match color {
            Color::White => (-1i32, 6usize),
            Color::Black => (1i32, 1usize),
        };

        let forward = row as i32 + dir;
        if on_board(forward, col as i32) && self.is_empty(forward as usize, col) {
            moves.push(Move::new((row, col), (forward as usize, col)));

            if row == start_row {
                let double = (row as i32 + 2 * dir) as usize;
                if self.is_empty(double, col) {
                    moves.push(Move::new((row, col), (double, col)));
                }
            }
        }

        for dc in [-1i32, 1] {
            let (r, c) = (row as i32 + dir, col as i32 + dc);
            if on_board(r, c) && self.is_enemy(r as usize, c as usize, color) {
                moves.push(Move::new((row, col), (r as usize, c as usize)));
            }
        }
    }
}
