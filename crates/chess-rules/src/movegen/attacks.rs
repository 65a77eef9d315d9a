//! Check detection.
//!
//! Every query scans the whole board and asks each attacker for its attack
//! set via [`attacked_squares`]; there are no precomputed attack tables.

use super::attacked_squares;
use crate::Position;
use chess_core::{Color, Square};

/// Returns true if any piece of `by_color` attacks `sq`.
pub fn is_square_attacked(position: &Position, sq: Square, by_color: Color) -> bool {
    position
        .board
        .pieces_of(by_color)
        .any(|(from, _)| attacked_squares(position, from).contains(sq))
}

/// Returns true if the king of `color` is attacked.
///
/// # Panics
///
/// Panics if `color` has no king on the board.
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let king_sq = position.board.king_square(color);
    is_square_attacked(position, king_sq, color.opposite())
}
