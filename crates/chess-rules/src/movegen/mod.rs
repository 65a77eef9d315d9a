//! Move generation.
//!
//! A single reachability primitive, [`reachable`], answers both "where can
//! this piece go" and "which squares does this piece attack". Legal move
//! listing and check detection are built on it, so they cannot disagree.

mod attacks;
mod legal;
pub mod perft;

use crate::{Position, SquareSet};
use chess_core::{CastleSide, Color, Piece, PieceKind, Square};

pub use attacks::{is_king_in_check, is_square_attacked};
pub use legal::{has_legal_move, is_legal, legal_moves, legal_moves_from, validate};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// What a reachability query is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Destinations the piece may move to, ignoring self-check.
    Moves,
    /// Squares the piece attacks. Pawns attack both forward diagonals
    /// whatever stands there, and kings never attack by castling.
    Attacks,
}

/// Returns the squares reachable by the piece on `from`.
///
/// Empty if `from` is empty.
pub fn reachable(position: &Position, from: Square, reach: Reach) -> SquareSet {
    let Some(piece) = position.board.get(from) else {
        return SquareSet::EMPTY;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_reach(position, from, piece.color, reach),
        PieceKind::Knight => step_reach(position, from, piece.color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => slide_reach(position, from, piece.color, &DIAGONALS),
        PieceKind::Rook => slide_reach(position, from, piece.color, &ORTHOGONALS),
        PieceKind::Queen => {
            slide_reach(position, from, piece.color, &ORTHOGONALS)
                | slide_reach(position, from, piece.color, &DIAGONALS)
        }
        PieceKind::King => {
            let mut squares = step_reach(position, from, piece.color, &KING_OFFSETS);
            if reach == Reach::Moves {
                squares |= castling_targets(position, from, piece.color);
            }
            squares
        }
    }
}

/// Pseudo-legal destinations of the piece on `from`.
#[inline]
pub fn pseudo_legal_moves(position: &Position, from: Square) -> SquareSet {
    reachable(position, from, Reach::Moves)
}

/// Squares attacked by the piece on `from`.
#[inline]
pub fn attacked_squares(position: &Position, from: Square) -> SquareSet {
    reachable(position, from, Reach::Attacks)
}

fn pawn_reach(position: &Position, from: Square, us: Color, reach: Reach) -> SquareSet {
    let board = &position.board;
    let dir = us.pawn_direction();
    let mut squares = SquareSet::EMPTY;

    for df in [-1, 1] {
        let Some(to) = from.offset(dir, df) else {
            continue;
        };
        let capturable = match board.get(to) {
            Some(target) => target.color != us,
            None => position.en_passant == Some(to),
        };
        if reach == Reach::Attacks || capturable {
            squares.insert(to);
        }
    }

    if reach == Reach::Moves {
        if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
            squares.insert(one);
            if from.rank_index() == us.pawn_rank() {
                if let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
                    squares.insert(two);
                }
            }
        }
    }

    squares
}

fn step_reach(position: &Position, from: Square, us: Color, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .filter(|&to| !is_own(position, to, us))
        .collect()
}

fn slide_reach(position: &Position, from: Square, us: Color, directions: &[(i8, i8)]) -> SquareSet {
    let mut squares = SquareSet::EMPTY;
    for &(dr, df) in directions {
        let mut cursor = from.offset(dr, df);
        while let Some(to) = cursor {
            match position.board.get(to) {
                None => squares.insert(to),
                Some(p) => {
                    if p.color != us {
                        squares.insert(to);
                    }
                    break;
                }
            }
            cursor = to.offset(dr, df);
        }
    }
    squares
}

fn is_own(position: &Position, sq: Square, us: Color) -> bool {
    position.board.get(sq).is_some_and(|p| p.color == us)
}

/// Castling destinations for the king of `us` standing on `from`.
///
/// A side qualifies only if the right is still held, the king is on its
/// home square with its own rook in the corner, every square between them
/// is empty, and the king's origin, transit and destination squares are
/// not attacked.
fn castling_targets(position: &Position, from: Square, us: Color) -> SquareSet {
    let rank = us.back_rank();
    let home = Square::from_coords(rank, 4);
    if from != home {
        return SquareSet::EMPTY;
    }

    let board = &position.board;
    let them = us.opposite();
    let rook = Piece::new(PieceKind::Rook, us);
    let mut targets = SquareSet::EMPTY;

    for side in CastleSide::ALL {
        if !position.castling.allows(us, side) {
            continue;
        }
        let rook_file = side.rook_file();
        if board.get(Square::from_coords(rank, rook_file)) != Some(rook) {
            continue;
        }
        let (lo, hi) = if rook_file < 4 { (rook_file + 1, 4) } else { (5, rook_file) };
        if !(lo..hi).all(|file| board.is_empty(Square::from_coords(rank, file))) {
            continue;
        }
        let target_file = side.king_target_file();
        let (path_lo, path_hi) = if target_file < 4 { (target_file, 4) } else { (4, target_file) };
        let path_safe = (path_lo..=path_hi)
            .all(|file| !is_square_attacked(position, Square::from_coords(rank, file), them));
        if path_safe {
            targets.insert(Square::from_coords(rank, target_file));
        }
    }

    targets
}

/// True if moving the piece on `from` to `to` is an en passant capture.
pub(crate) fn is_en_passant_capture(position: &Position, from: Square, to: Square) -> bool {
    position.en_passant == Some(to)
        && from.file_index() != to.file_index()
        && position.board.is_empty(to)
        && position
            .board
            .get(from)
            .is_some_and(|p| p.kind == PieceKind::Pawn)
}

/// Square of the pawn taken by an en passant capture from `from` to `to`:
/// the target's file on the capturer's rank.
#[inline]
pub(crate) fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::from_coords(from.rank_index(), to.file_index())
}
