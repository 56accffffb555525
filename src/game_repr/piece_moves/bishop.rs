use super::super::board::Board;
use super::super::moves::MoveList;

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Generate bishop moves into a provided buffer
    pub(crate) fn bishop_moves_into(&self, row: usize, col: usize, moves: &mut MoveList) {
        self.sliding_moves_into(row, col, &BISHOP_DIRECTIONS, moves);
    }
}
