//! Game status and the rule set abstraction.
//!
//! Status is never stored as independent flags: [`evaluate`] derives it from
//! the position alone, so it cannot drift from the board.

mod standard;

pub use standard::StandardChess;

use crate::movegen::{has_legal_move, is_king_in_check};
use crate::{Position, SquareSet};
use chess_core::{Color, Move, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a game stands.
///
/// `Checkmate` and `Stalemate` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Snapshot of the side to move's situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusReport {
    pub side_to_move: Color,
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl StatusReport {
    pub const fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        }
    }
}

/// Derives check, checkmate and stalemate for the side to move.
pub fn evaluate(position: &Position) -> StatusReport {
    let side = position.side_to_move;
    let in_check = is_king_in_check(position, side);
    let can_move = has_legal_move(position, side);
    StatusReport {
        side_to_move: side,
        in_check,
        checkmate: in_check && !can_move,
        stalemate: !in_check && !can_move,
    }
}

/// The rules a [`Game`](crate::Game) is played under.
///
/// # Example
///
/// ```
/// use chess_rules::rules::RuleSet;
/// use chess_rules::StandardChess;
/// use chess_core::Square;
///
/// let position = StandardChess.initial_position();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// assert_eq!(StandardChess.legal_moves_from(&position, e2).len(), 2);
/// ```
pub trait RuleSet {
    /// Returns the starting position.
    fn initial_position(&self) -> Position;

    /// Legal destinations of the piece on `from` for the side to move.
    fn legal_moves_from(&self, position: &Position, from: Square) -> SquareSet;

    /// Returns true if the side to move may play `from`-`to`.
    fn is_legal(&self, position: &Position, from: Square, to: Square) -> bool;

    /// Plays a move already known to be legal.
    fn apply(&self, position: &mut Position, from: Square, to: Square) -> Move;

    /// Check, checkmate and stalemate for the side to move.
    fn status(&self, position: &Position) -> StatusReport;
}
