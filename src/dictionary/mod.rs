//! Dictionary for word validation
//!
//! Provides the embedded word list and the [`Trie`] built from it. The trie is
//! an explicit, caller-owned object: build it once with [`warm_up`] (or
//! [`embedded`]) ahead of play and pass it by reference to the search.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use trie::{NodeId, Trie};

use log::info;
use std::time::Instant;

/// Build the long-lived trie from a word source
///
/// This is the one expensive setup step; callers should run it once, before
/// the first round, and keep the result for the life of the process.
pub fn warm_up<I, S>(words: I) -> Trie
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = Instant::now();
    let trie = Trie::build(words);
    info!(
        "Dictionary ready: {} words, {} nodes in {:.1?}",
        trie.len(),
        trie.node_count(),
        start.elapsed()
    );
    trie
}

/// Build the trie from the embedded dictionary
#[must_use]
pub fn embedded() -> Trie {
    warm_up(DICTIONARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_lowercase_tokens() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_trie_contains_known_words() {
        let trie = embedded();
        assert!(trie.has_word("CARD"));
        assert!(trie.has_word("ACORN"));
        assert!(trie.has_pure_prefix("CAR"));
        assert!(!trie.has_word("CAR"));
    }

    #[test]
    fn embedded_trie_drops_short_and_duplicate_entries() {
        let trie = embedded();
        let long_unique: std::collections::HashSet<&str> = DICTIONARY
            .iter()
            .copied()
            .filter(|w| w.len() >= crate::core::MINIMUM_WORD_LENGTH)
            .collect();
        assert_eq!(trie.len(), long_unique.len());
        assert!(trie.len() < DICTIONARY_COUNT);
    }

    #[test]
    fn warm_up_from_custom_list() {
        let trie = warm_up(vec!["coder".to_string(), "code".to_string()]);
        assert_eq!(trie.len(), 2);
        assert!(trie.has_word("CODER"));
    }
}
