use super::board::Board;
use super::moves::{DetailedMove, MoveList};
use super::piece::{Color, Type};

impl Board {
    /// Every move obeying piece movement rules for `color`, before any
    /// king-safety filtering
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for row in 0..8 {
            for col in 0..8 {
                let piece = self.piece_at(row, col);
                if piece.is_none() || piece.color != color {
                    continue;
                }

                match piece.piece_type {
                    Type::Pawn => self.pawn_moves_into(row, col, &mut moves),
                    Type::Knight => self.knight_moves_into(row, col, &mut moves),
                    Type::Bishop => self.bishop_moves_into(row, col, &mut moves),
                    Type::Rook => self.rook_moves_into(row, col, &mut moves),
                    Type::Queen => self.queen_moves_into(row, col, &mut moves),
                    Type::King => self.king_moves_into(row, col, &mut moves),
                    Type::None => unreachable!(),
                }
            }
        }

        moves
    }

    /// True iff any opponent pseudo-legal move targets `color`'s king square.
    ///
    /// A well-formed board has exactly one king per color; a missing king is
    /// a precondition violation and panics.
    pub fn is_in_check(&self, color: Color) -> bool {
        let mut king_square = None;
        'scan: for row in 0..8 {
            for col in 0..8 {
                let piece = self.piece_at(row, col);
                if piece.piece_type == Type::King && piece.color == color {
                    king_square = Some((row, col));
                    break 'scan;
                }
            }
        }

        let king_square = king_square
            .unwrap_or_else(|| panic!("malformed board: no {:?} king present", color));

        self.pseudo_legal_moves(color.opposite())
            .iter()
            .any(|mv| mv.to == king_square)
    }

    /// Pseudo-legal moves that do not leave `color`'s own king in check,
    /// verified by simulating each candidate on a board copy
    pub fn legal_moves(&self, color: Color) -> MoveList {
        self.pseudo_legal_moves(color)
            .into_iter()
            .filter(|&mv| !self.apply(mv).is_in_check(color))
            .collect()
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pseudo_legal_moves(color)
            .into_iter()
            .any(|mv| !self.apply(mv).is_in_check(color))
    }

    /// Legal moves annotated with mover kind, capture, promotion and
    /// gives-check flags
    pub fn detailed_moves(&self, color: Color) -> Vec<DetailedMove> {
        self.legal_moves(color)
            .into_iter()
            .map(|mv| {
                let piece = self.piece_at(mv.from.0, mv.from.1).piece_type;
                let is_capture = self.is_enemy(mv.to.0, mv.to.1, color);

                let is_promotion = piece == Type::Pawn
                    && match color {
                        Color::White => mv.to.0 == 0,
                        Color::Black => mv.to.0 == 7,
                    };

                let gives_check = self.apply(mv).is_in_check(color.opposite());

                DetailedMove {
                    mv,
                    piece,
                    is_capture,
                    is_promotion,
                    gives_check,
                }
            })
            .collect()
    }
}
