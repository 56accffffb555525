use super::super::board::Board;
use super::super::moves::MoveList;

const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Board {
    /// Generate queen moves into a provided buffer
    pub(crate) fn queen_moves_into(&self, row: usize, col: usize, moves: &mut MoveList) {
        self.sliding_moves_into(row, col, &QUEEN_DIRECTIONS, moves);
    }
}
