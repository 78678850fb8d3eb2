//! Word Factory - CLI
//!
//! Generate boards, solve them, trace words, score submissions, and play
//! timed rounds in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};
use word_factory::{
    board::generate_board,
    commands::{
        PlayConfig, StatsConfig, make_rng, run_benchmark, run_play, run_stats, score_words,
        solve_board, solve_grid, trace_word,
    },
    core::{DEFAULT_TIME, Highlight},
    dictionary::{self, Trie, loader::load_from_file},
    output::{
        print_benchmark_result, print_board, print_path_result, print_score_result,
        print_solve_result, print_stats,
    },
};

#[derive(Parser)]
#[command(
    name = "word_factory",
    about = "Word-search board generator, solver and timed game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (one `word<TAB>metadata` entry per line). The embedded
    /// list is a small sample for demos and tests; pass a full word list for
    /// real games and benchmarks
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a timed round (default). Use -d with a full word list for real games
    Play {
        /// Round length in seconds
        #[arg(short, long, default_value_t = DEFAULT_TIME)]
        time: u64,

        /// Seed for reproducible boards
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print a random board
    Generate {
        /// Seed for reproducible boards
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also list every word on the board
        #[arg(long)]
        solve: bool,
    },

    /// List every valid word on a board
    Solve {
        /// Board rows separated by '/', e.g. CGNCA/AORVR/XCZDZ/TEQNU/NLZOA
        board: String,
    },

    /// Trace a word on a board
    Path {
        /// Board rows separated by '/'
        board: String,

        /// Word to trace
        word: String,
    },

    /// Score a list of words against a board
    Score {
        /// Board rows separated by '/'
        board: String,

        /// Submitted words, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Check generated letter frequencies against the distribution
    Stats {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,

        /// Seed for reproducible boards
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Solve random boards in parallel and report throughput
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible boards
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Build the trie from the -d flag, or the embedded dictionary
fn load_dictionary(path: Option<&str>) -> Result<Trie> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to read dictionary {path}: {e}"))?;
            Ok(dictionary::warm_up(words))
        }
        None => {
            info!("No dictionary given, using the embedded sample list");
            Ok(dictionary::embedded())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        time: DEFAULT_TIME,
        seed: None,
    });

    match command {
        Commands::Play { time, seed } => {
            let trie = load_dictionary(cli.dictionary.as_deref())?;
            let config = PlayConfig {
                seconds: time,
                ..PlayConfig::default()
            };
            run_play(&config, &trie, &mut make_rng(seed)).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Generate { seed, solve } => {
            let board = generate_board(&mut make_rng(seed));
            debug!("Generated board {board:?}");
            if solve {
                let trie = load_dictionary(cli.dictionary.as_deref())?;
                print_solve_result(&solve_grid(board, &trie));
            } else {
                print_board(&board, &Highlight::from_path(board.size(), &[]));
                let flat: String = board.letters().iter().map(|&b| b as char).collect();
                println!("\n  {flat}");
            }
            Ok(())
        }
        Commands::Solve { board } => {
            let trie = load_dictionary(cli.dictionary.as_deref())?;
            let result = solve_board(&board, &trie).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Path { board, word } => {
            let result = trace_word(&board, &word).map_err(|e| anyhow::anyhow!(e))?;
            print_path_result(&result);
            Ok(())
        }
        Commands::Score { board, words } => {
            let trie = load_dictionary(cli.dictionary.as_deref())?;
            let result = score_words(&board, words.as_slice(), &trie).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Stats { count, seed } => {
            println!("Generating {count} boards...");
            let stats = run_stats(&StatsConfig::new(count), &mut make_rng(seed));
            print_stats(&stats);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let trie = load_dictionary(cli.dictionary.as_deref())?;
            println!("Solving {count} random boards...");
            let result = run_benchmark(&trie, count, &mut make_rng(seed));
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
