//! Benchmark command
//!
//! Generates random boards and solves them in parallel to measure search
//! throughput and how many words typical boards hold.

use crate::board::generate_board;
use crate::core::Grid;
use crate::dictionary::Trie;
use crate::search::WordFinder;
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub empty_boards: usize,
    /// Board with the most words and its word count
    pub richest_board: Option<(Grid, usize)>,
    /// Word-count histogram in buckets of `BUCKET_WIDTH`
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Width of a word-count histogram bucket
pub const BUCKET_WIDTH: usize = 10;

/// Generate `count` boards and solve them all
pub fn run_benchmark<R: Rng + ?Sized>(trie: &Trie, count: usize, rng: &mut R) -> BenchmarkResult {
    let boards: Vec<Grid> = (0..count).map(|_| generate_board(rng)).collect();
    benchmark_boards(trie, boards)
}

/// Solve the given boards in parallel and collect statistics
#[must_use]
pub fn benchmark_boards(trie: &Trie, boards: Vec<Grid>) -> BenchmarkResult {
    let start = Instant::now();
    let results = WordFinder::new(trie).find_all_par(&boards);
    let duration = start.elapsed();

    let counts: Vec<usize> = results.iter().map(Vec::len).collect();
    let total_boards = boards.len();
    let total_words: usize = counts.iter().sum();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &n in &counts {
        *distribution.entry(n / BUCKET_WIDTH).or_insert(0) += 1;
    }

    let richest_board = counts
        .iter()
        .enumerate()
        .max_by_key(|&(i, &n)| (n, std::cmp::Reverse(i)))
        .map(|(i, &n)| (boards[i].clone(), n));

    BenchmarkResult {
        total_boards,
        total_words,
        average_words: if total_boards == 0 {
            0.0
        } else {
            total_words as f64 / total_boards as f64
        },
        min_words: counts.iter().copied().min().unwrap_or(0),
        max_words: counts.iter().copied().max().unwrap_or(0),
        empty_boards: counts.iter().filter(|&&n| n == 0).count(),
        richest_board,
        distribution,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
