//! Board solving command
//!
//! Lists every dictionary word on a given board with its point value.

use crate::core::Grid;
use crate::dictionary::Trie;
use crate::scoring::word_score;
use crate::search::find_all_words;
use std::time::{Duration, Instant};

/// Result of solving a board
pub struct SolveResult {
    pub board: Grid,
    pub words: Vec<(String, i64)>,
    pub total_points: i64,
    pub duration: Duration,
}

/// Parse a board and find every valid word on it
///
/// # Errors
///
/// Returns an error if the board text is not a square grid of letters.
pub fn solve_board(board: &str, trie: &Trie) -> Result<SolveResult, String> {
    let board: Grid = board.parse().map_err(|e| format!("Invalid board: {e}"))?;
    Ok(solve_grid(board, trie))
}

/// Find every valid word on an already-built grid
#[must_use]
pub fn solve_grid(board: Grid, trie: &Trie) -> SolveResult {
    let start = Instant::now();
    let words: Vec<(String, i64)> = find_all_words(&board, trie)
        .into_iter()
        .map(|word| {
            let points = word_score(&word);
            (word, points)
        })
        .collect();
    let duration = start.elapsed();
    let total_points = words.iter().map(|(_, points)| points).sum();

    SolveResult {
        board,
        words,
        total_points,
        duration,
    }
}
