//! Letter distribution check
//!
//! Generates many boards and compares observed letter frequencies with the
//! normalized weights of the distribution table.

use crate::board::generate_board;
use crate::core::DISTRIBUTION;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};

/// Configuration for a distribution run
pub struct StatsConfig {
    pub boards: usize,
    pub show_progress: bool,
}

impl StatsConfig {
    #[must_use]
    pub const fn new(boards: usize) -> Self {
        Self {
            boards,
            show_progress: true,
        }
    }
}

/// Observed versus expected frequency for one letter
#[derive(Debug, Clone)]
pub struct LetterStat {
    pub letter: char,
    pub count: usize,
    /// Expected share of all letters, in percent
    pub expected: f64,
    /// Observed share of all letters, in percent
    pub observed: f64,
}

impl LetterStat {
    #[must_use]
    pub fn deviation(&self) -> f64 {
        (self.observed - self.expected).abs()
    }

    /// True if both shares agree after rounding to whole percent
    #[must_use]
    pub fn matches_rounded(&self) -> bool {
        self.observed.round() == self.expected.round()
    }
}

/// Statistics from a distribution run
pub struct DistributionStats {
    pub boards: usize,
    pub total_letters: usize,
    pub letters: Vec<LetterStat>,
    pub duration: Duration,
}

impl DistributionStats {
    /// Largest absolute deviation in percentage points
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        self.letters
            .iter()
            .map(LetterStat::deviation)
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn all_match_rounded(&self) -> bool {
        self.letters.iter().all(LetterStat::matches_rounded)
    }
}

/// Generate `config.boards` boards and tally letter frequencies
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_stats<R: Rng + ?Sized>(config: &StatsConfig, rng: &mut R) -> DistributionStats {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.boards as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} boards ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut counts = [0usize; 26];
    let mut total_letters = 0usize;

    for i in 0..config.boards {
        let grid = generate_board(rng);
        for &letter in grid.letters() {
            counts[usize::from(letter - b'A')] += 1;
        }
        total_letters += grid.cell_count();

        if i % 1000 == 0 {
            pb.set_position(i as u64);
        }
    }
    pb.finish_and_clear();

    let total_weight = f64::from(DISTRIBUTION.total_weight());
    let letters = DISTRIBUTION
        .iter()
        .map(|(letter, weight)| {
            let count = counts[usize::from(letter - b'A')];
            let observed = if total_letters == 0 {
                0.0
            } else {
                100.0 * count as f64 / total_letters as f64
            };
            LetterStat {
                letter: letter as char,
                count,
                expected: 100.0 * f64::from(weight) / total_weight,
                observed,
            }
        })
        .collect();

    DistributionStats {
        boards: config.boards,
        total_letters,
        letters,
        duration: start.elapsed(),
    }
}
