//! Applying a validated move to a position.

use crate::movegen::{en_passant_victim, is_en_passant_capture};
use crate::Position;
use chess_core::{CastleSide, Move, Piece, PieceKind, Square};

/// Plays `from`-`to` on `position` and returns the record of what happened.
///
/// The move must already have been validated as legal; the executor only
/// carries out its consequences:
/// - captures (including en passant) land in the record's `captured`
/// - castling also moves the rook to the square beside the king
/// - a pawn reaching the far rank becomes a queen
/// - the en passant square is set after a double push and cleared otherwise
/// - king and rook moves revoke castling rights, as does taking a rook in
///   its corner
/// - the side to move flips
///
/// # Panics
///
/// Panics if `from` is empty.
pub fn apply(position: &mut Position, from: Square, to: Square) -> Move {
    let Some(piece) = position.board.get(from) else {
        panic!("apply called with no piece on {}", from);
    };
    let us = piece.color;
    let them = us.opposite();
    let en_passant = is_en_passant_capture(position, from, to);

    let mut record = Move::quiet(from, to, piece);
    record.captured = position.board.get(to).filter(|p| p.color == them);

    if piece.kind == PieceKind::King {
        let df = to.file_index() as i8 - from.file_index() as i8;
        if let Some(side) = CastleSide::from_king_delta(df) {
            let rank = from.rank_index();
            let rook = position
                .board
                .take(Square::from_coords(rank, side.rook_file()));
            position
                .board
                .set(Square::from_coords(rank, side.rook_target_file()), rook);
            record.castle = Some(side);
        }
    }

    if en_passant {
        record.captured = position.board.take(en_passant_victim(from, to));
        record.en_passant = true;
    }

    position.board.relocate(from, to);

    if piece.kind == PieceKind::Pawn && to.rank_index() == us.promotion_rank() {
        position.board.put(to, Piece::new(PieceKind::Queen, us));
        record.promoted_to = Some(PieceKind::Queen);
    }

    let dr = to.rank_index() as i8 - from.rank_index() as i8;
    position.en_passant = if piece.kind == PieceKind::Pawn && dr.abs() == 2 {
        Some(Square::from_coords(
            (from.rank_index() + to.rank_index()) / 2,
            from.file_index(),
        ))
    } else {
        None
    };

    match piece.kind {
        PieceKind::King => position.castling.revoke_color(us),
        PieceKind::Rook => {
            if let Some(side) = corner_side(from, us.back_rank()) {
                position.castling.revoke(us, side);
            }
        }
        _ => {}
    }
    if record.captured.is_some_and(|p| p.kind == PieceKind::Rook) {
        if let Some(side) = corner_side(to, them.back_rank()) {
            position.castling.revoke(them, side);
        }
    }

    position.side_to_move = them;
    record
}

/// Castling side whose rook starts on `sq`, if `sq` is a corner of `back_rank`.
fn corner_side(sq: Square, back_rank: u8) -> Option<CastleSide> {
    if sq.rank_index() != back_rank {
        return None;
    }
    CastleSide::ALL
        .into_iter()
        .find(|side| side.rook_file() == sq.file_index())
}
