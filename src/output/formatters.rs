//! Formatting utilities for terminal output

use crate::core::{Coord, Grid, Highlight};
use crate::scoring::Verdict;

/// Board rows as plain text, highlighted cells in brackets
#[must_use]
pub fn board_lines(grid: &Grid, highlight: &Highlight) -> Vec<String> {
    (0..grid.size())
        .map(|row| {
            (0..grid.size())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    let letter = grid.get(coord) as char;
                    if highlight.contains(coord) {
                        format!("[{letter}]")
                    } else {
                        format!(" {letter} ")
                    }
                })
                .collect()
        })
        .collect()
}

/// Format a path as `(r,c) → (r,c) → ...`
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Signed point label for a verdict
#[must_use]
pub fn verdict_label(verdict: Verdict) -> String {
    match verdict {
        Verdict::Valid(points) => format!("+{points}"),
        Verdict::Invalid => "-1".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_lines_plain() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let lines = board_lines(&grid, &Highlight::from_path(2, &[]));
        assert_eq!(lines, vec![" A  B ", " C  D "]);
    }

    #[test]
    fn board_lines_highlighted() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let path = [Coord::new(0, 1), Coord::new(1, 0)];
        let lines = board_lines(&grid, &Highlight::from_path(2, &path));
        assert_eq!(lines, vec![" A [B]", "[C] D "]);
    }

    #[test]
    fn path_formatting() {
        let path = [Coord::new(2, 1), Coord::new(3, 1)];
        assert_eq!(format_path(&path), "(2,1) → (3,1)");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn verdict_labels() {
        assert_eq!(verdict_label(Verdict::Valid(4)), "+4");
        assert_eq!(verdict_label(Verdict::Invalid), "-1");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
