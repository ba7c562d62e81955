//! Perft (performance test) for move generation correctness verification.

use crate::position::Position;

/// Count the leaf nodes `depth` plies below `position`.
///
/// Depth 0 returns 1. Depth 1 returns the number of legal moves with every
/// promotion choice counted, without playing them. Each child is a copy of
/// the parent with one move applied.
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.expanded_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut child = *position;
            child.apply(mv);
            perft(&child, depth - 1)
        })
        .sum()
}

/// Perft split by first move, as `(coordinate move, node count)` pairs
/// sorted by move text.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = position
        .expanded_legal_moves()
        .into_iter()
        .map(|mv| {
            let mut child = *position;
            child.apply(mv);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
