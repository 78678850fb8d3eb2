//! Prefix tree over the word dictionary
//!
//! Nodes live in a flat arena and edges are keyed by byte, so both lookups
//! cost `O(len)` regardless of dictionary size. The search walks the tree one
//! letter at a time through [`Trie::step`] instead of re-querying the whole
//! prefix at every extension.

use crate::core::MINIMUM_WORD_LENGTH;
use rustc_hash::FxHashMap;

/// Handle to a node inside a [`Trie`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<u8, NodeId>,
    terminal: bool,
}

/// Immutable prefix tree of upper-case words
///
/// Built once from a word list and then only read, so a single instance can be
/// shared by reference across threads.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    const ROOT: NodeId = NodeId(0);

    /// Build a trie from candidate words
    ///
    /// Words are upper-cased and anything shorter than `MINIMUM_WORD_LENGTH`
    /// is dropped. Duplicates collapse into one entry.
    ///
    /// # Examples
    /// ```
    /// use word_factory::dictionary::Trie;
    ///
    /// let trie = Trie::build(["card", "Cart", "to", "CARD"]);
    /// assert_eq!(trie.len(), 2);
    /// assert!(trie.has_word("CARD"));
    /// assert!(trie.has_prefix("CAR"));
    /// assert!(!trie.has_word("TO"));
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self {
            nodes: vec![Node::default()],
            words: 0,
        };
        for word in words {
            let key = word.as_ref().trim().to_uppercase();
            if key.chars().count() >= MINIMUM_WORD_LENGTH {
                trie.insert(key.as_bytes());
            }
        }
        trie
    }

    fn insert(&mut self, key: &[u8]) {
        let mut node = Self::ROOT;
        for &byte in key {
            node = if let Some(&next) = self.nodes[node.0 as usize].children.get(&byte) {
                next
            } else {
                let next = NodeId(self.nodes.len() as u32);
                self.nodes.push(Node::default());
                self.nodes[node.0 as usize].children.insert(byte, next);
                next
            };
        }

        let terminal = &mut self.nodes[node.0 as usize].terminal;
        if !*terminal {
            *terminal = true;
            self.words += 1;
        }
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The node for the empty prefix
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Follow one edge from `node`
    #[inline]
    #[must_use]
    pub fn step(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node.0 as usize].children.get(&letter).copied()
    }

    /// True if the path to `node` spells a complete word
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// Node reached by spelling `s` from the root
    #[must_use]
    pub fn find(&self, s: &str) -> Option<NodeId> {
        s.bytes()
            .try_fold(self.root(), |node, byte| self.step(node, byte))
    }

    /// True iff `s` was inserted as a word
    #[must_use]
    pub fn has_word(&self, s: &str) -> bool {
        self.find(s).is_some_and(|node| self.is_word(node))
    }

    /// True iff some word starts with `s`, including `s` itself
    ///
    /// The empty string is a prefix of everything, so it is only rejected by
    /// an empty trie.
    #[must_use]
    pub fn has_prefix(&self, s: &str) -> bool {
        if s.is_empty() {
            return !self.is_empty();
        }
        self.find(s).is_some()
    }

    /// True iff some word strictly longer than `s` starts with `s`
    #[must_use]
    pub fn has_pure_prefix(&self, s: &str) -> bool {
        self.find(s)
            .is_some_and(|node| !self.nodes[node.0 as usize].children.is_empty())
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::build(std::iter::empty::<&str>())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        Trie::build(["bird", "chicken", "rabbit", "card", "cards", "cart"])
    }

    #[test]
    fn has_word_for_inserted() {
        let trie = sample();
        for word in ["BIRD", "CHICKEN", "RABBIT", "CARD", "CARDS", "CART"] {
            assert!(trie.has_word(word), "{word} should be present");
        }
        assert_eq!(trie.len(), 6);
    }

    #[test]
    fn has_word_false_for_non_words() {
        let trie = sample();
        assert!(!trie.has_word("CAR"));
        assert!(!trie.has_word("BIRDS"));
        assert!(!trie.has_word("DOG"));
        assert!(!trie.has_word(""));
    }

    #[test]
    fn lookups_are_case_sensitive_on_stored_keys() {
        let trie = sample();
        assert!(!trie.has_word("bird"));
        assert!(!trie.has_prefix("bi"));
    }

    #[test]
    fn has_prefix_includes_whole_word() {
        let trie = sample();
        assert!(trie.has_prefix("C"));
        assert!(trie.has_prefix("CHICK"));
        assert!(trie.has_prefix("CARD"));
        assert!(trie.has_prefix("CARDS"));
        assert!(!trie.has_prefix("CARDSS"));
        assert!(!trie.has_prefix("X"));
        assert!(!trie.has_prefix("BIRX"));
    }

    #[test]
    fn pure_prefix_requires_a_longer_word() {
        let trie = sample();
        assert!(trie.has_pure_prefix("CAR"));
        assert!(trie.has_pure_prefix("CARD"));
        assert!(!trie.has_pure_prefix("CARDS"));
        assert!(!trie.has_pure_prefix("BIRD"));
        assert!(!trie.has_pure_prefix("ZZZ"));
    }

    #[test]
    fn filters_short_words() {
        let trie = Trie::build(["to", "cat", "a", "rain"]);
        assert_eq!(trie.len(), 1);
        assert!(!trie.has_word("TO"));
        assert!(!trie.has_word("CAT"));
        assert!(!trie.has_prefix("CAT"));
        assert!(trie.has_word("RAIN"));
    }

    #[test]
    fn duplicates_collapse() {
        let trie = Trie::build(["Bird", "BIRD", "bird ", "bird"]);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn empty_trie_matches_nothing() {
        let trie = Trie::default();
        assert!(trie.is_empty());
        assert!(!trie.has_word("BIRD"));
        assert!(!trie.has_prefix("B"));
        assert!(!trie.has_prefix(""));
        assert!(!trie.has_pure_prefix(""));
    }

    #[test]
    fn empty_prefix_matches_non_empty_trie() {
        assert!(sample().has_prefix(""));
    }

    #[test]
    fn stepping_matches_string_queries() {
        let trie = sample();
        let mut node = trie.root();
        for &letter in b"CARD" {
            node = trie.step(node, letter).unwrap();
        }
        assert!(trie.is_word(node));
        assert_eq!(Some(node), trie.find("CARD"));
        assert!(trie.step(node, b'Q').is_none());
    }

    #[test]
    fn collect_into_trie() {
        let trie: Trie = vec!["RAIN".to_string(), "RAINS".to_string()]
            .into_iter()
            .collect();
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn trie_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trie>();
    }
}
