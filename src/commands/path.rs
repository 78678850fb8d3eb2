//! Path tracing command
//!
//! Shows where a word can be traced on a board.

use crate::core::{Coord, Grid};
use crate::search::find_path;

/// Result of tracing one word
pub struct PathResult {
    pub board: Grid,
    pub word: String,
    pub path: Vec<Coord>,
}

impl PathResult {
    #[must_use]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Parse a board and find a witness path for `word`
///
/// # Errors
///
/// Returns an error if the board text is not a square grid of letters.
pub fn trace_word(board: &str, word: &str) -> Result<PathResult, String> {
    let board: Grid = board.parse().map_err(|e| format!("Invalid board: {e}"))?;
    let path = find_path(word, &board);

    Ok(PathResult {
        board,
        word: word.to_uppercase(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_known_word() {
        let result = trace_word("CGNCA/AORVR/XCZDZ/TEQNU/NLZOA", "celn").unwrap();
        assert!(result.found());
        assert_eq!(result.word, "CELN");
        assert_eq!(result.path[0], Coord::new(2, 1));
    }

    #[test]
    fn trace_missing_word() {
        let result = trace_word("AB/CD", "DOG").unwrap();
        assert!(!result.found());
    }

    #[test]
    fn trace_invalid_board() {
        assert!(trace_word("ABC", "A").is_err());
    }
}
