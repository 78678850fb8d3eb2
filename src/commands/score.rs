//! Submission scoring command
//!
//! Scores a list of words against everything findable on a board.

use crate::core::Grid;
use crate::dictionary::Trie;
use crate::scoring::ScoreBreakdown;
use crate::search::find_all_words;

/// Result of scoring a submission list
pub struct ScoreResult {
    pub board: Grid,
    pub valid_words: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Parse a board and score `submissions` against its valid words
///
/// Submissions are upper-cased before comparison.
///
/// # Errors
///
/// Returns an error if the board text is not a square grid of letters.
pub fn score_words<S: AsRef<str>>(
    board: &str,
    submissions: &[S],
    trie: &Trie,
) -> Result<ScoreResult, String> {
    let board: Grid = board.parse().map_err(|e| format!("Invalid board: {e}"))?;
    let valid_words = find_all_words(&board, trie);
    let submissions: Vec<String> = submissions
        .iter()
        .map(|word| word.as_ref().trim().to_uppercase())
        .collect();
    let breakdown = ScoreBreakdown::new(submissions.as_slice(), valid_words.as_slice());

    Ok(ScoreResult {
        board,
        valid_words,
        breakdown,
    })
}
