//! Full game management with history tracking.
//!
//! The [`Game`] struct is the only mutable object in the engine. It owns the
//! current position, the move history, the captured pieces and the derived
//! status. Independent games are independent values; nothing is shared.

use crate::movegen::validate;
use crate::rules::{GameStatus, RuleSet, StandardChess, StatusReport};
use crate::{MoveError, Position, SquareSet};
use chess_core::{Color, Move, Piece, Square};
use serde::Serialize;

/// Result of [`Game::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// Whether the move was played.
    pub applied: bool,
    /// Status after the attempt; unchanged when the move was rejected.
    pub status: StatusReport,
}

/// A chess game from the standard starting arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
    /// Pieces captured *by* each color, indexed by [`Color::index`].
    captured: [Vec<Piece>; 2],
    /// Derived from `position` after every change, never set directly.
    status: StatusReport,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(StandardChess.initial_position())
    }

    /// Creates a game from a custom starting position.
    ///
    /// The position must hold exactly one king per color.
    pub fn from_position(position: Position) -> Self {
        let status = StandardChess.status(&position);
        Game {
            position,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            status,
        }
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Legal destinations for the piece on `from`, for move highlighting.
    ///
    /// Empty if the square is empty, holds a piece of the side not to move,
    /// or the game is over.
    pub fn legal_moves_from(&self, from: Square) -> SquareSet {
        if self.is_game_over() {
            return SquareSet::EMPTY;
        }
        StandardChess.legal_moves_from(&self.position, from)
    }

    /// Returns true if `from`-`to` would be accepted right now.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        !self.is_game_over() && StandardChess.is_legal(&self.position, from, to)
    }

    /// Plays `from`-`to`, or explains why it cannot be played.
    ///
    /// On error the game is unchanged.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<&Move, MoveError> {
        if let Err(err) = self.check_move(from, to) {
            tracing::debug!(%from, %to, error = %err, "move rejected");
            return Err(err);
        }

        let record = StandardChess.apply(&mut self.position, from, to);
        if let Some(taken) = record.captured {
            self.captured[record.piece.color.index()].push(taken);
        }
        self.status = StandardChess.status(&self.position);

        tracing::debug!(
            mv = %record,
            piece = %record.piece,
            captured = ?record.captured,
            castle = ?record.castle,
            en_passant = record.en_passant,
            promoted = ?record.promoted_to,
            "move applied"
        );
        if self.status.status().is_terminal() {
            tracing::info!(
                status = %self.status.status(),
                side = %self.status.side_to_move,
                plies = self.history.len() + 1,
                "game over"
            );
        }

        self.history.push(record);
        Ok(&self.history[self.history.len() - 1])
    }

    fn check_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let status = self.status.status();
        if status.is_terminal() {
            return Err(MoveError::GameOver(status));
        }
        validate(&self.position, from, to, self.position.side_to_move)
    }

    /// Plays `from`-`to` if it is legal.
    ///
    /// A rejected move leaves the game untouched and reports
    /// `applied: false`.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let applied = self.try_move(from, to).is_ok();
        MoveOutcome {
            applied,
            status: self.status,
        }
    }

    /// Check, checkmate and stalemate for the side to move.
    pub fn status(&self) -> StatusReport {
        self.status
    }

    pub fn game_status(&self) -> GameStatus {
        self.status.status()
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.status.status().is_terminal()
    }

    /// Returns the move history, oldest first.
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    /// Move history as `"White: e2-e4"` lines.
    pub fn move_log(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|m| format!("{}: {}", m.piece.color, m))
            .collect()
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Pieces captured by `color`.
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Restores the starting arrangement and clears all history.
    pub fn reset(&mut self) {
        tracing::debug!(plies = self.history.len(), "game reset");
        *self = Self::new();
    }
}
