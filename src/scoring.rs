//! Scoring of player submissions
//!
//! A submission on the board's valid-word list earns one point at the minimum
//! length plus one per extra letter. Anything else costs one point. Repeated
//! invalid guesses are penalized every time and totals may go negative.

use crate::core::MINIMUM_WORD_LENGTH;
use rustc_hash::FxHashSet;

/// Points for a valid word: `max(0, len - MINIMUM_WORD_LENGTH + 1)`
///
/// # Examples
/// ```
/// use word_factory::scoring::word_score;
///
/// assert_eq!(word_score("BIRD"), 1);
/// assert_eq!(word_score("CHICKEN"), 4);
/// assert_eq!(word_score("TO"), 0);
/// ```
#[must_use]
pub fn word_score(word: &str) -> i64 {
    let len = word.chars().count() as i64;
    (len - MINIMUM_WORD_LENGTH as i64 + 1).max(0)
}

/// Net score of `submissions` against a board's valid words
///
/// Left fold from 0: `-1` for each submission not in `valid_words`,
/// `word_score` otherwise.
///
/// # Examples
/// ```
/// use word_factory::scoring::list_score;
///
/// let valid = ["BIRD", "CHICKEN", "RABBIT"];
/// let moves = ["BIRD", "CHICKEN", "RABBIT", "TO", "NOT_ON_THE_LIST"];
/// assert_eq!(list_score(&moves, &valid), 6);
/// ```
#[must_use]
pub fn list_score<S, V>(submissions: &[S], valid_words: &[V]) -> i64
where
    S: AsRef<str>,
    V: AsRef<str>,
{
    let valid: FxHashSet<&str> = valid_words.iter().map(AsRef::as_ref).collect();
    submissions.iter().fold(0, |score, word| {
        let word = word.as_ref();
        if valid.contains(word) {
            score + word_score(word)
        } else {
            score - 1
        }
    })
}

/// Outcome for one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid(i64),
    Invalid,
}

impl Verdict {
    /// Points this submission adds to the total
    #[must_use]
    pub const fn points(self) -> i64 {
        match self {
            Self::Valid(points) => points,
            Self::Invalid => -1,
        }
    }
}

/// Per-submission scoring detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub entries: Vec<(String, Verdict)>,
    pub total: i64,
}

impl ScoreBreakdown {
    /// Score each submission in order; `total` always equals [`list_score`]
    #[must_use]
    pub fn new<S, V>(submissions: &[S], valid_words: &[V]) -> Self
    where
        S: AsRef<str>,
        V: AsRef<str>,
    {
        let valid: FxHashSet<&str> = valid_words.iter().map(AsRef::as_ref).collect();
        let entries: Vec<(String, Verdict)> = submissions
            .iter()
            .map(|word| {
                let word = word.as_ref();
                let verdict = if valid.contains(word) {
                    Verdict::Valid(word_score(word))
                } else {
                    Verdict::Invalid
                };
                (word.to_string(), verdict)
            })
            .collect();
        let total = entries.iter().map(|(_, v)| v.points()).sum();

        Self { entries, total }
    }

    /// Number of submissions that were on the valid list
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, v)| matches!(v, Verdict::Valid(_)))
            .count()
    }

    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.entries.len() - self.valid_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 3] = ["BIRD", "CHICKEN", "RABBIT"];

    #[test]
    fn word_score_is_linear_in_length() {
        assert_eq!(word_score("BIRD"), 1);
        assert_eq!(word_score("RABBIT"), 3);
        assert_eq!(word_score("CHICKEN"), 4);
        assert_eq!(word_score("CAR"), 0);
        assert_eq!(word_score(""), 0);
    }

    #[test]
    fn mixed_submissions() {
        let moves = ["BIRD", "CHICKEN", "RABBIT", "TO", "NOT_ON_THE_LIST"];
        assert_eq!(list_score(&moves, &VALID), 6);
    }

    #[test]
    fn all_invalid_goes_negative() {
        let none: [&str; 0] = [];
        assert_eq!(list_score(&["TO", "BIRD"], &none), -2);
    }

    #[test]
    fn repeated_invalid_guesses_penalized_each_time() {
        assert_eq!(list_score(&["DOG", "DOG", "DOG"], &VALID), -3);
    }

    #[test]
    fn repeated_valid_words_count_each_time() {
        assert_eq!(list_score(&["BIRD", "BIRD"], &VALID), 2);
    }

    #[test]
    fn no_submissions_scores_zero() {
        let moves: [&str; 0] = [];
        assert_eq!(list_score(&moves, &VALID), 0);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(list_score(&["bird"], &VALID), -1);
    }

    #[test]
    fn accepts_owned_strings() {
        let valid: Vec<String> = VALID.iter().map(ToString::to_string).collect();
        let moves = vec!["RABBIT".to_string()];
        assert_eq!(list_score(&moves, &valid), 3);
    }

    #[test]
    fn breakdown_matches_list_score() {
        let moves = ["BIRD", "CHICKEN", "RABBIT", "TO", "NOT_ON_THE_LIST"];
        let breakdown = ScoreBreakdown::new(&moves, &VALID);
        assert_eq!(breakdown.total, list_score(&moves, &VALID));
        assert_eq!(breakdown.valid_count(), 3);
        assert_eq!(breakdown.invalid_count(), 2);
        assert_eq!(breakdown.entries[1], ("CHICKEN".to_string(), Verdict::Valid(4)));
        assert_eq!(breakdown.entries[3], ("TO".to_string(), Verdict::Invalid));
    }

    #[test]
    fn verdict_points() {
        assert_eq!(Verdict::Valid(3).points(), 3);
        assert_eq!(Verdict::Invalid.points(), -1);
    }
}
