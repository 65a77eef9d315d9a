//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Counts only match published tables while no promotion occurs inside the
//! searched tree, since promotion here always produces a queen.

use super::legal_moves;
use crate::{execute, Position};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        let mut next = position.clone();
        execute::apply(&mut next, from, to);
        nodes += perft(&next, depth - 1);
    }
    nodes
}
