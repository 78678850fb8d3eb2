//! Timed terminal round
//!
//! Single-player game loop: show a board, collect words until the clock runs
//! out, then reveal every valid word and the score. The round itself has no
//! clock; this loop owns the deadline.

use crate::core::{Coord, DEFAULT_TIME, Highlight};
use crate::dictionary::Trie;
use crate::game::Round;
use crate::output::display::{print_board, print_round_summary};
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Configuration for a play session
pub struct PlayConfig {
    pub seconds: u64,
    pub player: String,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seconds: DEFAULT_TIME,
            player: "Player".to_string(),
        }
    }
}

/// What a line of player input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Quit,
    Redraw,
    Entered { word: String, path: Vec<Coord> },
    Rejected(String),
}

/// Apply one line of input to a round in play
pub fn handle_input(round: &mut Round, player: &str, line: &str) -> InputOutcome {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        ":q" | ":quit" | ":exit" => return InputOutcome::Quit,
        "" | ":b" | ":board" => return InputOutcome::Redraw,
        _ => {}
    }

    match round.enter_word(player, line) {
        Ok(()) => {
            let word = line.to_uppercase();
            let path = round.highlight(&word);
            InputOutcome::Entered { word, path }
        }
        Err(e) => InputOutcome::Rejected(e.to_string()),
    }
}

/// Run timed rounds until the player quits
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn run_play<R: Rng + ?Sized>(config: &PlayConfig, trie: &Trie, rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Factory - Timed Round                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Trace words of {} or more letters through adjacent cells (diagonals count).",
        crate::core::MINIMUM_WORD_LENGTH
    );
    println!("Each cell may be used once per word. Wrong guesses cost a point.\n");
    println!("Commands: ':board' to redraw, ':quit' to exit\n");

    let lines = spawn_line_reader();
    let mut round = Round::new();

    loop {
        round.start(rng);
        let deadline = Instant::now() + Duration::from_secs(config.seconds);
        if let Some(board) = round.board() {
            print_board(board, &Highlight::from_path(board.size(), &[]));
        }
        println!("\n⏱  {} seconds. Go!\n", config.seconds);

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            prompt(remaining)?;

            let line = match lines.recv_timeout(remaining) {
                Ok(line) => line,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("Input closed, ending round early");
                    break;
                }
            };

            if Instant::now() >= deadline {
                println!("\n{}", "Too late, that word didn't count.".yellow());
                break;
            }

            match handle_input(&mut round, &config.player, &line) {
                InputOutcome::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                InputOutcome::Redraw => {
                    if let Some(board) = round.board() {
                        print_board(board, &Highlight::from_path(board.size(), &[]));
                    }
                }
                InputOutcome::Entered { word, path } => {
                    if path.is_empty() {
                        println!("  {} {}", word.bright_white().bold(), "(not on the board)".red());
                    } else if let Some(board) = round.board() {
                        print_board(board, &Highlight::from_path(board.size(), &path));
                    }
                }
                InputOutcome::Rejected(reason) => println!("  {}", reason.red()),
            }
        }

        println!("\n{}", "⏰ Time's up!".bright_yellow().bold());
        let summary = round.finish(trie).map_err(|e| e.to_string())?;
        print_round_summary(&summary, &config.player);

        print!("\nPlay again? (yes/no): ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        match lines.recv() {
            Ok(answer) if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New round!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn prompt(remaining: Duration) -> Result<(), String> {
    print!("[{:>3}s] > ", remaining.as_secs());
    io::stdout().flush().map_err(|e| e.to_string())
}

/// Read stdin on a background thread so the round clock can interrupt input
fn spawn_line_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
