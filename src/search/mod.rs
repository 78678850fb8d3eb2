//! Board search
//!
//! Both searches share the grid's neighbor order, so results are fully
//! deterministic for a given grid and dictionary.

mod finder;
mod path;

pub use finder::{WordFinder, compare_words, find_all_words};
pub use path::{find_path, is_valid_path};
