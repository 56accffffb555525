// Piece-square tables for positional evaluation
// Values share the pawn=1.0 material scale
// Tables are row-indexed from White's side of the board (row 0 = black's back
// rank, the promotion rank for White); for Black pieces the rows are mirrored
//
// Only pawns and knights carry tables. Bishops, rooks, queens and kings get
// no positional-table bonus.

use crate::game_repr::{Color, Type};

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: [[f64; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], // promotion rank
    [5.0, 5.0, 5.0, -5.0, -5.0, 5.0, 5.0, 5.0],
    [1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0],
    [0.5, 0.5, 1.0, 2.5, 2.5, 1.0, 0.5, 0.5],
    [0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0],
    [0.5, -0.5, -1.0, 0.0, 0.0, -1.0, -0.5, 0.5],
    [0.5, 1.0, 1.0, -2.0, -2.0, 1.0, 1.0, 0.5], // start row
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: [[f64; 8]; 8] = [
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
    [-4.0, -2.0, 0.0, 0.5, 0.5, 0.0, -2.0, -4.0],
    [-3.0, 0.5, 1.0, 1.5, 1.5, 1.0, 0.5, -3.0],
    [-3.0, 0.0, 1.5, 2.0, 2.0, 1.5, 0.0, -3.0],
    [-3.0, 0.5, 1.5, 2.0, 2.0, 1.5, 0.5, -3.0],
    [-3.0, 0.0, 1.0, 1.5, 1.5, 1.0, 0.0, -3.0],
    [-4.0, -2.0, 0.0, 0.0, 0.0, 0.0, -2.0, -4.0],
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
];

/// Positional-table bonus for a piece on (row, col).
/// Black pieces read the table with mirrored rows.
pub fn pst_bonus(piece_type: Type, row: usize, col: usize, color: Color) -> f64 {
    let row = match color {
        Color::White => row,
        Color::Black => 7 - row,
    };

    match piece_type {
        Type::Pawn => PAWN_TABLE[row][col],
        Type::Knight => KNIGHT_TABLE[row][col],
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Color, Type};

    #[test]
    fn test_pawn_prefers_advancement() {
        // A white pawn one step from promotion outranks one on its start row
        let near_promotion = pst_bonus(Type::Pawn, 1, 0, Color::White);
        let on_start = pst_bonus(Type::Pawn, 6, 0, Color::White);
        assert!(near_promotion > on_start);
    }

    #[test]
    fn test_knight_prefers_center() {
        let center = pst_bonus(Type::Knight, 4, 3, Color::White);
        let corner = pst_bonus(Type::Knight, 7, 0, Color::White);
        assert!(center > corner);
    }

    #[test]
    fn test_black_rows_are_mirrored() {
        // A black pawn on its start row reads the same value as a white pawn
        // on white's start row
        let white = pst_bonus(Type::Pawn, 6, 2, Color::White);
        let black = pst_bonus(Type::Pawn, 1, 2, Color::Black);
        assert_eq!(white, black);
    }

    #[test]
    fn test_untabled_pieces_get_no_bonus() {
        assert_eq!(pst_bonus(Type::Queen, 4, 3, Color::White), 0.0);
        assert_eq!(pst_bonus(Type::Rook, 4, 3, Color::Black), 0.0);
        assert_eq!(pst_bonus(Type::King, 0, 4, Color::Black), 0.0);
    }
}
