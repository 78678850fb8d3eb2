//! Word list loading utilities
//!
//! Dictionary sources are line-oriented: `word<TAB>metadata`. Only the word
//! token is consumed; everything after the first tab is ignored.

use std::fs;
use std::io;
use std::path::Path;

/// Load word tokens from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_factory::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.tsv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Extract the word token from every non-empty line
///
/// # Examples
/// ```
/// use word_factory::dictionary::loader::words_from_lines;
///
/// let words = words_from_lines("acorn\tthe fruit of the oak\ncord\n\n");
/// assert_eq!(words, vec!["acorn", "cord"]);
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let token = line.split('\t').next().unwrap_or_default().trim();
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}
