//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules engine and
//! its front ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for the append-only move record

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::{CastleSide, Move, MoveTextError};
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square, SquareError};
