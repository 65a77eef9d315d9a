//! Move records.

use crate::{Piece, PieceKind, Square, SquareError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing `"e2-e4"` style move text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveTextError {
    #[error("invalid move '{0}': expected \"<from>-<to>\" like \"e2-e4\"")]
    Malformed(String),

    #[error(transparent)]
    Square(#[from] SquareError),
}

/// The two wings a king can castle towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// File the rook starts on.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// File the rook lands on, next to the king.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Side of the board a king's file delta of two points to.
    #[inline]
    pub const fn from_king_delta(df: i8) -> Option<CastleSide> {
        match df {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// A move that was played.
///
/// Records are created once by the executor and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece that moved, as it stood before the move.
    pub piece: Piece,
    /// The piece taken, including a pawn taken en passant.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub captured: Option<Piece>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub castle: Option<CastleSide>,
    #[serde(default)]
    pub en_passant: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub promoted_to: Option<PieceKind>,
}

impl Move {
    /// Creates a quiet move record with no special flags.
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            castle: None,
            en_passant: false,
            promoted_to: None,
        }
    }

    /// Parses coordinate text into a (from, to) pair.
    ///
    /// Accepts `"e2-e4"` and the unseparated `"e2e4"`.
    pub fn parse_coordinates(s: &str) -> Result<(Square, Square), MoveTextError> {
        let s = s.trim();
        let (from, to) = match s.split_once('-') {
            Some(parts) => parts,
            None if s.len() == 4 && s.is_ascii() => s.split_at(2),
            None => return Err(MoveTextError::Malformed(s.to_string())),
        };
        Ok((from.parse()?, to.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
