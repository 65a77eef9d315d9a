//! Chess rules engine on a plain 8x8 board.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of optional pieces
//! - [`Position`] - board plus side to move, castling rights and en passant square
//! - [`movegen`] - pseudo-legal generation, check detection and legality
//! - [`execute`] - applying a legal move, including castling, en passant and promotion
//! - [`rules`] - check/checkmate/stalemate evaluation and the [`RuleSet`] trait
//! - [`Game`] - the mutable game state with history and captured pieces
//!
//! # Architecture
//!
//! Move listing and attack detection share one reachability primitive,
//! [`movegen::reachable`]. Legality is decided by trying a move on a copy of
//! the position and asking whether the mover's king is attacked. Game status
//! is recomputed from the position after every move by enumerating legal
//! moves; nothing is cached across positions.
//!
//! # Example
//!
//! ```
//! use chess_rules::Game;
//! use chess_core::Square;
//!
//! let sq = |s: &str| Square::from_algebraic(s).unwrap();
//!
//! let mut game = Game::new();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     assert!(game.attempt_move(sq(from), sq(to)).applied);
//! }
//! assert!(game.status().checkmate);
//! assert_eq!(game.move_log()[3], "Black: d8-h4");
//! ```

mod board;
mod error;
pub mod execute;
mod game;
pub mod movegen;
mod position;
pub mod rules;
mod square_set;

pub use board::Board;
pub use error::MoveError;
pub use game::{Game, MoveOutcome};
pub use movegen::{is_king_in_check, is_legal, is_square_attacked, legal_moves_from};
pub use position::{CastlingRights, Position};
pub use rules::{evaluate, GameStatus, RuleSet, StandardChess, StatusReport};
pub use square_set::{SquareSet, SquareSetIter};
