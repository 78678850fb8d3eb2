//! Display functions for command results

use super::formatters::{board_lines, create_progress_bar, format_path, verdict_label};
use crate::commands::benchmark::BUCKET_WIDTH;
use crate::commands::{BenchmarkResult, DistributionStats, PathResult, ScoreResult, SolveResult};
use crate::core::{Coord, Grid, Highlight};
use crate::game::RoundSummary;
use crate::scoring::{ScoreBreakdown, Verdict};
use colored::Colorize;

/// Print a board, highlighted cells in color
pub fn print_board(grid: &Grid, highlight: &Highlight) {
    let width = grid.size() * 3 + 2;
    println!("  ┌{}┐", "─".repeat(width));
    for (row, line) in board_lines(grid, highlight).iter().enumerate() {
        let mut styled = String::new();
        for col in 0..grid.size() {
            let cell = &line[col * 3..col * 3 + 3];
            if highlight.contains(Coord::new(row, col)) {
                styled.push_str(&cell.bright_yellow().bold().to_string());
            } else {
                styled.push_str(&cell.bright_white().to_string());
            }
        }
        println!("  │ {styled} │");
    }
    println!("  └{}┘", "─".repeat(width));
}

fn print_word_columns(words: &[(String, i64)]) {
    for chunk in words.chunks(4) {
        let row: Vec<String> = chunk
            .iter()
            .map(|(word, points)| format!("{word:<14} {:>3}", format!("+{points}")))
            .collect();
        println!("   {}", row.join("  "));
    }
}

/// Print every word found on a board
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    print_board(&result.board, &Highlight::from_path(result.board.size(), &[]));

    println!(
        "\n📖 {} words worth {} points ({:.2?})",
        result.words.len().to_string().bright_yellow().bold(),
        result.total_points.to_string().green().bold(),
        result.duration
    );
    if result.words.is_empty() {
        println!("   {}", "No valid words on this board.".bright_black());
    } else {
        print_word_columns(&result.words);
    }
}

/// Print the witness path for a word
pub fn print_path_result(result: &PathResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Tracing: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    print_board(
        &result.board,
        &Highlight::from_path(result.board.size(), &result.path),
    );

    if result.found() {
        println!("\n{} {}", "✅ Path:".green().bold(), format_path(&result.path));
    } else {
        println!("\n{}", "❌ Word cannot be traced on this board".red().bold());
    }
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    for (word, verdict) in &breakdown.entries {
        let label = verdict_label(*verdict);
        match verdict {
            Verdict::Valid(_) => println!("   {word:<16} {}", label.green()),
            Verdict::Invalid => println!("   {word:<16} {}", label.red()),
        }
    }
}

/// Print a submission list's score
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_breakdown(&result.breakdown);
    println!(
        "\n   Valid: {}   Invalid: {}   Total: {}",
        result.breakdown.valid_count().to_string().green(),
        result.breakdown.invalid_count().to_string().red(),
        result.breakdown.total.to_string().bright_yellow().bold()
    );
    println!(
        "   Board holds {} valid words",
        result.valid_words.len()
    );
}

/// Print the end-of-round reveal for one player
pub fn print_round_summary(summary: &RoundSummary, player: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match summary.player(player) {
        Some(result) => {
            print_breakdown(&result.breakdown);
            println!(
                "\n  {} {}",
                "Score:".bright_white().bold(),
                result.score().to_string().bright_yellow().bold()
            );
            if result.raw_score() < 0 {
                println!("  {}", format!("(net {})", result.raw_score()).bright_black());
            }
        }
        None => println!("  {}", "No words entered.".bright_black()),
    }

    println!(
        "\n📖 All {} words on this board:",
        summary.valid_words.len().to_string().bright_yellow()
    );
    let words: Vec<(String, i64)> = summary
        .valid_words
        .iter()
        .map(|w| (w.clone(), crate::scoring::word_score(w)))
        .collect();
    print_word_columns(&words);
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print observed versus expected letter frequencies
pub fn print_stats(stats: &DistributionStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER DISTRIBUTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} boards, {} letters ({:.2}s)\n",
        stats.boards,
        stats.total_letters,
        stats.duration.as_secs_f64()
    );
    println!("   Letter  Expected  Observed");
    for stat in &stats.letters {
        let bar = create_progress_bar(stat.observed, 15.0, 30);
        let observed = format!("{:6.2}%", stat.observed);
        let observed = if stat.matches_rounded() {
            observed.green()
        } else {
            observed.red()
        };
        println!(
            "   {}       {:6.2}%   {} {}",
            stat.letter.to_string().bright_white().bold(),
            stat.expected,
            observed,
            bar.bright_black()
        );
    }

    println!(
        "\n   Max deviation: {} percentage points",
        format!("{:.3}", stats.max_deviation()).bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Empty boards:     {}", result.empty_boards);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.total_boards > 0 {
        println!("\n📈 {}", "Words per board:".bright_cyan().bold());
        let mut buckets: Vec<_> = result.distribution.iter().collect();
        buckets.sort();
        for (&bucket, &count) in buckets {
            let pct = (count as f64 / result.total_boards as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            let low = bucket * BUCKET_WIDTH;
            let high = low + BUCKET_WIDTH - 1;
            println!("   {low:>3}-{high:<3} {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if let Some((board, words)) = &result.richest_board {
        println!("\n🏆 Richest board ({words} words):");
        print_board(board, &Highlight::from_path(board.size(), &[]));
    }
}
