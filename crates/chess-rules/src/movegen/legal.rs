//! Legal move validation.

use super::{en_passant_victim, is_en_passant_capture, is_king_in_check, pseudo_legal_moves};
use crate::{MoveError, Position, SquareSet};
use chess_core::{Color, Square};

/// Checks a move for `mover` and says why it is illegal.
///
/// The move is tried on a copy of the position: the piece is relocated (and
/// a pawn taken en passant removed) and the mover's king must not be
/// attacked afterwards. Castling's rook hop cannot affect the king's safety
/// and is not replayed.
pub fn validate(position: &Position, from: Square, to: Square, mover: Color) -> Result<(), MoveError> {
    if from == to {
        return Err(MoveError::SameSquare(from));
    }
    let Some(piece) = position.board.get(from) else {
        return Err(MoveError::EmptySquare(from));
    };
    if piece.color != mover {
        return Err(MoveError::WrongColor {
            square: from,
            expected: mover,
        });
    }
    if position.board.get(to).is_some_and(|p| p.color == mover) {
        return Err(MoveError::OwnPieceAtTarget(to));
    }
    if !pseudo_legal_moves(position, from).contains(to) {
        return Err(MoveError::Unreachable { from, to });
    }

    let mut hypothetical = position.clone();
    if is_en_passant_capture(position, from, to) {
        hypothetical.board.take(en_passant_victim(from, to));
    }
    hypothetical.board.relocate(from, to);
    if is_king_in_check(&hypothetical, mover) {
        return Err(MoveError::KingInCheck { from, to });
    }
    Ok(())
}

/// Returns true if `mover` may play `from`-`to`.
#[inline]
pub fn is_legal(position: &Position, from: Square, to: Square, mover: Color) -> bool {
    validate(position, from, to, mover).is_ok()
}

/// Legal destinations of the piece on `from` for the side to move.
///
/// Empty when `from` is empty or holds a piece of the side not to move.
pub fn legal_moves_from(position: &Position, from: Square) -> SquareSet {
    let mover = position.side_to_move;
    match position.board.get(from) {
        Some(piece) if piece.color == mover => {
            pseudo_legal_moves(position, from).filter(|to| is_legal(position, from, to, mover))
        }
        _ => SquareSet::EMPTY,
    }
}

/// Every legal (from, to) pair for the side to move.
pub fn legal_moves(position: &Position) -> Vec<(Square, Square)> {
    position
        .board
        .pieces_of(position.side_to_move)
        .flat_map(|(from, _)| legal_moves_from(position, from).iter().map(move |to| (from, to)))
        .collect()
}

/// Returns true if `color` has at least one legal move.
///
/// Stops at the first one found.
pub fn has_legal_move(position: &Position, color: Color) -> bool {
    position.board.pieces_of(color).any(|(from, _)| {
        pseudo_legal_moves(position, from)
            .iter()
            .any(|to| is_legal(position, from, to, color))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{diagram, sq, squares};

    #[test]
    fn startpos_legal_moves() {
        let position = Position::startpos();
        assert_eq!(legal_moves_from(&position, sq("e2")), squares(&["e3", "e4"]));
        assert_eq!(legal_moves_from(&position, sq("b1")), squares(&["a3", "c3"]));
        assert_eq!(legal_moves(&position).len(), 20);
    }

    #[test]
    fn legal_moves_from_opponent_or_empty_square_is_empty() {
        let position = Position::startpos();
        assert!(legal_moves_from(&position, sq("e7")).is_empty());
        assert!(legal_moves_from(&position, sq("e4")).is_empty());
    }

    #[test]
    fn rejection_reasons() {
        let position = Position::startpos();
        let white = Color::White;
        assert_eq!(
            validate(&position, sq("e2"), sq("e2"), white),
            Err(MoveError::SameSquare(sq("e2")))
        );
        assert_eq!(
            validate(&position, sq("e4"), sq("e5"), white),
            Err(MoveError::EmptySquare(sq("e4")))
        );
        assert_eq!(
            validate(&position, sq("e7"), sq("e5"), white),
            Err(MoveError::WrongColor {
                square: sq("e7"),
                expected: white
            })
        );
        assert_eq!(
            validate(&position, sq("a1"), sq("a2"), white),
            Err(MoveError::OwnPieceAtTarget(sq("a2")))
        );
        assert_eq!(
            validate(&position, sq("e2"), sq("e5"), white),
            Err(MoveError::Unreachable {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(validate(&position, sq("g1"), sq("f3"), white), Ok(()));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let position = diagram(
            [
                "....r..k", "........", "........", "........", "........", "........",
                "....N...", "....K...",
            ],
            Color::White,
        );
        assert_eq!(
            validate(&position, sq("e2"), sq("c3"), Color::White),
            Err(MoveError::KingInCheck {
                from: sq("e2"),
                to: sq("c3")
            })
        );
        assert!(legal_moves_from(&position, sq("e2")).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let position = diagram(
            [
                ".......k", "........", "........", "........", "........", "........",
                ".....r..", "....K...",
            ],
            Color::White,
        );
        let king = legal_moves_from(&position, sq("e1"));
        assert!(!king.contains(sq("f1")));
        assert!(!king.contains(sq("e2")));
        assert!(!king.contains(sq("d2")));
        assert!(king.contains(sq("f2")));
        assert!(king.contains(sq("d1")));
    }

    #[test]
    fn check_must_be_answered() {
        let position = diagram(
            [
                "....k...", "........", "........", "........", "....r...", "........",
                "P.......", "....K.N.",
            ],
            Color::White,
        );
        assert!(legal_moves_from(&position, sq("a2")).is_empty());
        assert_eq!(legal_moves_from(&position, sq("g1")), squares(&["e2"]));
    }

    #[test]
    fn en_passant_exposing_king_on_rank_is_illegal() {
        let position = diagram(
            [
                "....k...", "........", "........", "K..pP..r", "........", "........",
                "........", "........",
            ],
            Color::White,
        )
        .with_en_passant(sq("d6"));
        assert_eq!(
            validate(&position, sq("e5"), sq("d6"), Color::White),
            Err(MoveError::KingInCheck {
                from: sq("e5"),
                to: sq("d6")
            })
        );
        assert!(is_legal(&position, sq("e5"), sq("e6"), Color::White));
    }

    #[test]
    fn has_legal_move_detects_stalemate() {
        let position = diagram(
            [
                ".......k", ".....Q..", "......K.", "........", "........", "........",
                "........", "........",
            ],
            Color::Black,
        );
        assert!(!has_legal_move(&position, Color::Black));
        assert!(has_legal_move(&position, Color::White));
    }

    #[test]
    fn bare_kings_always_have_a_move() {
        let position = diagram(
            [
                "k.......", "........", ".K......", "........", "........", "........",
                "........", "........",
            ],
            Color::Black,
        );
        assert_eq!(legal_moves_from(&position, sq("a8")), squares(&["b8"]));
    }
}
