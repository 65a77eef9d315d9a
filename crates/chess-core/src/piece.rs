//! Chess piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase ASCII letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on the board: a kind together with its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns the ASCII letter, uppercase for White.
    pub const fn letter(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses an ASCII letter into a piece; uppercase is White.
    pub const fn from_letter(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }

    /// Returns the Unicode chess glyph for this piece.
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_letter() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).letter(), 'P');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).letter(), 'p');
        assert_eq!(Piece::new(PieceKind::King, Color::White).letter(), 'K');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).letter(), 'n');
    }

    #[test]
    fn piece_from_letter() {
        assert_eq!(
            Piece::from_letter('P'),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            Piece::from_letter('q'),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(Piece::from_letter('x'), None);
    }

    #[test]
    fn symbols() {
        assert_eq!(Piece::new(PieceKind::King, Color::White).symbol(), '♔');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).symbol(), '♟');
    }

    #[test]
    fn display() {
        let q = Piece::new(PieceKind::Queen, Color::Black);
        assert_eq!(q.to_string(), "Black Queen");
    }
}
