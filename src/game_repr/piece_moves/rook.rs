use super::super::board::Board;
use super::super::moves::MoveList;

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Board {
    /// Generate rook moves into a provided buffer
    pub(crate) fn rook_moves_into(&self, row: usize, col: usize, moves: &mut MoveList) {
        self.sliding_moves_into(row, col, &ROOK_DIRECTIONS, moves);
    }
}
