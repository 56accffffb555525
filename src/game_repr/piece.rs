use crate::errors::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Type {
    /// Piece letter used by the two-character square codes
    pub fn letter(&self) -> char {
        match self {
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Rook => 'R',
            Self::Bishop => 'B',
            Self::Knight => 'N',
            Self::Pawn => 'P',
            Self::None => ' ',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// Two-character boundary code: `"  "` for an empty square, otherwise a
    /// color letter followed by a piece letter (e.g. `"wP"`, `"bK"`).
    pub fn code(&self) -> String {
        if self.is_none() {
            "  ".to_string()
        } else {
            let mut code = String::with_capacity(2);
            code.push(self.color.letter());
            code.push(self.piece_type.letter());
            code
        }
    }

    /// Parse a two-character square code. External tooling (renderers,
    /// snapshot storage) relies on this exact convention.
    pub fn from_code(code: &str) -> Result<Self> {
        if code == "  " {
            return Ok(Self::none());
        }

        let mut chars = code.chars();
        let (color_ch, piece_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(p), None) => (c, p),
            _ => {
                return Err(EngineError::InvalidBoard(format!(
                    "square code {:?} is not two characters",
                    code
                )))
            }
        };

        let color = match color_ch {
            'w' => Color::White,
            'b' => Color::Black,
            _ => {
                return Err(EngineError::InvalidBoard(format!(
                    "unknown color character {:?} in square code {:?}",
                    color_ch, code
                )))
            }
        };

        let piece_type = match piece_ch {
            'K' => Type::King,
            'Q' => Type::Queen,
            'R' => Type::Rook,
            'B' => Type::Bishop,
            'N' => Type::Knight,
            'P' => Type::Pawn,
            _ => {
                return Err(EngineError::InvalidBoard(format!(
                    "unknown piece character {:?} in square code {:?}",
                    piece_ch, code
                )))
            }
        };

        Ok(Self { color, piece_type })
    }
}
