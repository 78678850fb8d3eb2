//! Word Factory
//!
//! Engine for a timed word-search game: weighted random boards, trie-pruned
//! exhaustive word search, witness paths for highlighting, and scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use word_factory::core::Grid;
//! use word_factory::dictionary::Trie;
//! use word_factory::scoring::list_score;
//! use word_factory::search::{find_all_words, find_path};
//!
//! let trie = Trie::build(["acorn", "corn", "cord"]);
//! let grid: Grid = "CGNCA/AORVR/XCZDZ/TEQNU/NLZOA".parse().unwrap();
//!
//! let words = find_all_words(&grid, &trie);
//! assert_eq!(words, vec!["ACORN", "CORD", "CORN"]);
//! assert!(!find_path("ACORN", &grid).is_empty());
//! assert_eq!(list_score(&["ACORN", "BIRD"], &words), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary and prefix tree
pub mod dictionary;

// Random board generation
pub mod board;

// Path finding and exhaustive search
pub mod search;

// Submission scoring
pub mod scoring;

// Round lifecycle
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
