mod board;
mod movegen;
mod moves;
mod piece;
mod piece_moves;


pub use board::{on_board, Board};
pub use moves::{DetailedMove, Move, MoveList};
pub use piece::{Color, Piece, Type};
