pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use super::board::{on_board, Board};
use super::moves::{Move, MoveList};

impl Board {
    /// Walk each ray until blocked. The first blocking square is included
    /// when it holds an enemy piece (capture) and excluded when friendly.
    pub(crate) fn sliding_moves_into(
        &self,
        row: usize,
        col: usize,
        directions: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        let color = self.piece_at(row, col).color;

        for &(dr, dc) in directions {
            let (mut r, mut c) = (row as i32 + dr, col as i32 + dc);
            while on_board(r, c) {
                if self.is_empty(r as usize, c as usize) {
                    moves.push(Move::new((row, col), (r as usize, c as usize)));
                } else if self.is_enemy(r as usize, c as usize, color) {
                    moves.push(Move::new((row, col), (r as usize, c as usize)));
                    break;
                } else {
                    break;
                }
                r += dr;
                c += dc;
            }
        }
    }
}
