//! Standard chess rules implementation.

use super::{evaluate, RuleSet, StatusReport};
use crate::{execute, movegen, Position, SquareSet};
use chess_core::{Move, Square};

/// Standard chess rules.
///
/// - Standard piece movement
/// - Castling (kingside and queenside)
/// - En passant
/// - Pawn promotion, always to a queen
/// - Check, checkmate, and stalemate detection
///
/// Repetition and move-count draws are not part of these rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn legal_moves_from(&self, position: &Position, from: Square) -> SquareSet {
        movegen::legal_moves_from(position, from)
    }

    fn is_legal(&self, position: &Position, from: Square, to: Square) -> bool {
        movegen::is_legal(position, from, to, position.side_to_move)
    }

    fn apply(&self, position: &mut Position, from: Square, to: Square) -> Move {
        execute::apply(position, from, to)
    }

    fn status(&self, position: &Position) -> StatusReport {
        evaluate(position)
    }
}
