//! Reasons a move is rejected.

use crate::rules::GameStatus;
use chess_core::{Color, Square};
use thiserror::Error;

/// Why a requested move was not played.
///
/// Rejections are ordinary outcomes; the game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is over ({0})")]
    GameOver(GameStatus),

    #[error("start and end square are both {0}")]
    SameSquare(Square),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} does not belong to {expected}")]
    WrongColor { square: Square, expected: Color },

    #[error("{0} is occupied by a piece of the moving side")]
    OwnPieceAtTarget(Square),

    #[error("piece on {from} cannot move to {to}")]
    Unreachable { from: Square, to: Square },

    #[error("{from}-{to} would leave the king in check")]
    KingInCheck { from: Square, to: Square },
}
