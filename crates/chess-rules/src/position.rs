//! Chess position representation.

use chess_core::{CastleSide, Color, Piece, Square};

use crate::Board;

/// Castling rights flags.
///
/// Rights are only ever revoked; nothing in the engine grants them back
/// once a game is under way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const WHITE_KINGSIDE: u8 = 0b0001;
    const WHITE_QUEENSIDE: u8 = 0b0010;
    const BLACK_KINGSIDE: u8 = 0b0100;
    const BLACK_QUEENSIDE: u8 = 0b1000;

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` still holds the right to castle towards `side`.
    #[inline]
    pub const fn allows(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Removes one right.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Removes both rights of a color.
    #[inline]
    pub fn revoke_color(&mut self, color: Color) {
        for side in CastleSide::ALL {
            self.revoke(color, side);
        }
    }
}

/// Board placement plus the state that decides which moves are available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// Square a pawn passed over on the previous ply, capturable en passant
    /// by the very next move only.
    pub en_passant: Option<Square>,
}

impl Position {
    /// Creates a position from a board with no castling rights and no
    /// en passant square.
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Position {
            board: Board::standard(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
        }
    }

    /// Sets the castling rights.
    pub fn with_castling(mut self, castling: CastlingRights) -> Self {
        self.castling = castling;
        self
    }

    /// Sets the en passant target square.
    pub fn with_en_passant(mut self, sq: Square) -> Self {
        self.en_passant = Some(sq);
        self
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
