//! Feeding move text into a [`Game`] and summarizing the result.

use chess_core::{Color, Move, Piece};
use chess_rules::{Game, GameStatus, StatusReport};
use serde::Serialize;

/// A move that was not played, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based position of the move in the input list.
    pub index: usize,
    pub text: String,
    pub reason: String,
}

/// The game after a replay plus the moves that were refused.
#[derive(Debug)]
pub struct Replay {
    pub game: Game,
    pub rejected: Vec<Rejection>,
}

/// Plays `moves` from the starting position.
///
/// Unparseable or illegal entries are recorded as rejections. With
/// `stop_on_illegal` the first rejection ends the replay; otherwise it is
/// skipped and the next move is tried against the unchanged game.
pub fn replay<S: AsRef<str>>(moves: &[S], stop_on_illegal: bool) -> Replay {
    let mut game = Game::new();
    let mut rejected = Vec::new();

    for (index, text) in moves.iter().enumerate() {
        let text = text.as_ref();
        let result = Move::parse_coordinates(text)
            .map_err(|e| e.to_string())
            .and_then(|(from, to)| {
                game.try_move(from, to)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            });

        if let Err(reason) = result {
            tracing::warn!(index, text, %reason, "move not played");
            rejected.push(Rejection {
                index,
                text: text.to_string(),
                reason,
            });
            if stop_on_illegal {
                break;
            }
        }
    }

    Replay { game, rejected }
}

/// Splits a move file on whitespace.
pub fn split_moves(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

#[derive(Serialize)]
struct CapturedJson<'a> {
    white: &'a [Piece],
    black: &'a [Piece],
}

/// JSON view of a finished replay.
#[derive(Serialize)]
struct ReplayJson<'a> {
    status: GameStatus,
    report: StatusReport,
    history: &'a [Move],
    captured: CapturedJson<'a>,
    #[serde(skip_serializing_if = "none_rejected")]
    rejected: &'a [Rejection],
}

fn none_rejected(rejected: &&[Rejection]) -> bool {
    rejected.is_empty()
}

impl Replay {
    /// Serializes the outcome as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let report = self.game.status();
        serde_json::to_string_pretty(&ReplayJson {
            status: report.status(),
            report,
            history: self.game.move_history(),
            captured: CapturedJson {
                white: self.game.captured(Color::White),
                black: self.game.captured(Color::Black),
            },
            rejected: &self.rejected,
        })
    }

    /// One-line summary such as "checkmate, White wins".
    pub fn headline(&self) -> String {
        let report = self.game.status();
        match report.status() {
            GameStatus::Checkmate => {
                format!("checkmate, {} wins", report.side_to_move.opposite())
            }
            GameStatus::Stalemate => "stalemate, draw".to_string(),
            GameStatus::InProgress if report.in_check => {
                format!("{} to move, in check", report.side_to_move)
            }
            GameStatus::InProgress => format!("{} to move", report.side_to_move),
        }
    }

    /// Glyphs of the pieces `color` has captured, in capture order.
    pub fn captured_glyphs(&self, color: Color) -> String {
        self.game
            .captured(color)
            .iter()
            .map(|p| p.symbol())
            .collect()
    }

    /// The last `n` lines of the move log.
    pub fn log_tail(&self, n: usize) -> Vec<String> {
        let log = self.game.move_log();
        let start = log.len().saturating_sub(n);
        log[start..].to_vec()
    }
}
