//! Exhaustive word enumeration for a board
//!
//! Depth-first search from every cell over 8-directional neighbors. The
//! visited set is scoped to the current path and cleared on backtrack, so a
//! cell is never used twice in one word but is free for other paths. Each
//! extension follows one trie edge; a missing edge means no dictionary word
//! has the current prefix and the branch is abandoned.

use crate::core::{Coord, Grid, MINIMUM_WORD_LENGTH};
use crate::dictionary::{NodeId, Trie};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Reusable word finder bound to one dictionary
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'t> {
    trie: &'t Trie,
}

impl<'t> WordFinder<'t> {
    #[must_use]
    pub const fn new(trie: &'t Trie) -> Self {
        Self { trie }
    }

    /// Every distinct dictionary word that can be traced on `grid`
    ///
    /// Sorted longest first, then alphabetically.
    #[must_use]
    pub fn find_all(&self, grid: &Grid) -> Vec<String> {
        let mut search = Search {
            grid,
            trie: self.trie,
            visited: vec![false; grid.cell_count()],
            letters: Vec::with_capacity(grid.cell_count()),
            found: FxHashSet::default(),
            expanded: 0,
        };

        for start in grid.coords() {
            search.visit(start, self.trie.root());
        }

        debug!(
            "Found {} words after expanding {} nodes",
            search.found.len(),
            search.expanded
        );

        let mut words: Vec<String> = search.found.into_iter().collect();
        words.sort_by(|a, b| compare_words(a, b));
        words
    }

    /// Solve many boards in parallel, sharing the dictionary read-only
    #[must_use]
    pub fn find_all_par(&self, grids: &[Grid]) -> Vec<Vec<String>> {
        grids.par_iter().map(|grid| self.find_all(grid)).collect()
    }
}

/// Every distinct dictionary word that can be traced on `grid`
///
/// # Examples
/// ```
/// use word_factory::core::Grid;
/// use word_factory::dictionary::Trie;
/// use word_factory::search::find_all_words;
///
/// let trie = Trie::build(["code", "coder", "cord"]);
/// let grid = Grid::from_rows(&["CODER", "QRXJZ", "ZXQXJ", "JQZXQ", "XZJQZ"]).unwrap();
/// assert_eq!(find_all_words(&grid, &trie), vec!["CODER", "CODE", "CORD"]);
/// ```
#[must_use]
pub fn find_all_words(grid: &Grid, trie: &Trie) -> Vec<String> {
    WordFinder::new(trie).find_all(grid)
}

/// Result ordering: longer words first, then ascending byte order
#[must_use]
pub fn compare_words(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

struct Search<'g, 't> {
    grid: &'g Grid,
    trie: &'t Trie,
    visited: Vec<bool>,
    letters: Vec<u8>,
    found: FxHashSet<String>,
    expanded: usize,
}

impl Search<'_, '_> {
    fn visit(&mut self, coord: Coord, node: NodeId) {
        let grid = self.grid;
        let idx = grid.index(coord);
        if self.visited[idx] {
            return;
        }

        let letter = grid.get(coord);
        // Prefix pruning
        let Some(next) = self.trie.step(node, letter) else {
            return;
        };

        self.expanded += 1;
        self.visited[idx] = true;
        self.letters.push(letter);

        if self.trie.is_word(next) && self.letters.len() >= MINIMUM_WORD_LENGTH {
            let word: String = self.letters.iter().map(|&b| b as char).collect();
            self.found.insert(word);
        }

        // Keep going past complete words: longer words may share the prefix
        for neighbor in grid.neighbors(coord) {
            self.visit(neighbor, next);
        }

        self.letters.pop();
        self.visited[idx] = false;
    }
}
