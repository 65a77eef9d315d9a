//! The 8x8 board: pure storage and lookup of pieces by square.

use chess_core::{Color, Piece, PieceKind, Square};
use std::fmt;

/// Back-rank arrangement from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[rank][file]`.
///
/// Cloning gives an independent deep copy, which is how speculative
/// positions are evaluated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                board.put(
                    Square::from_coords(color.back_rank(), file as u8),
                    Piece::new(kind, color),
                );
                board.put(
                    Square::from_coords(color.pawn_rank(), file as u8),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.rank_index() as usize][sq.file_index() as usize]
    }

    /// Overwrites the cell at `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.rank_index() as usize][sq.file_index() as usize] = piece;
    }

    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Empties `sq`, returning what stood there.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.rank_index() as usize][sq.file_index() as usize].take()
    }

    /// Moves whatever is on `from` to `to`, returning the previous occupant of `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let replaced = self.get(to);
        self.set(to, moving);
        replaced
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Iterates over every occupied square, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Counts pieces equal to `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }

    /// Scans for the king of `color`.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Returns the square of the king of `color`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such king. Every position reachable through
    /// play has exactly one king per color, so a missing king is a bug in
    /// the caller that built the board.
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(sq) => sq,
            None => panic!("no {} king on the board", color),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.get(Square::from_coords(rank, file)) {
                    Some(p) => write!(f, "{} ", p.letter())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
