//! Command implementations

pub mod benchmark;
pub mod path;
pub mod play;
pub mod score;
pub mod solve;
pub mod stats;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use path::{PathResult, trace_word};
pub use play::{PlayConfig, run_play};
pub use score::{ScoreResult, score_words};
pub use solve::{SolveResult, solve_board, solve_grid};
pub use stats::{DistributionStats, StatsConfig, run_stats};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source for commands: seeded for reproducible boards, otherwise
/// seeded from the thread RNG
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}
