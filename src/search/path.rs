//! Witness path lookup for a single word
//!
//! Used to highlight what the player is typing. The result is presentational:
//! it only shows that a word can be traced, scoring never consults it.

use crate::core::{Coord, Grid};

/// Find one path on `grid` spelling `word`
///
/// Start cells are tried in row-major order and neighbors in
/// `DIRECTION_OFFSETS` order, so the same grid and word always give the same
/// path. Consecutive cells are 8-directionally adjacent and no cell repeats.
/// The word is upper-cased before matching. Returns an empty path if the word
/// is empty, longer than the grid, or cannot be traced.
///
/// # Examples
/// ```
/// use word_factory::core::{Coord, Grid};
/// use word_factory::search::find_path;
///
/// let grid = Grid::from_rows(&["CA", "RD"]).unwrap();
/// let path = find_path("card", &grid);
/// assert_eq!(path, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);
/// ```
#[must_use]
pub fn find_path(word: &str, grid: &Grid) -> Vec<Coord> {
    let target = word.to_ascii_uppercase().into_bytes();
    if target.is_empty() || target.len() > grid.cell_count() {
        return Vec::new();
    }

    let mut path = Vec::with_capacity(target.len());
    let mut visited = vec![false; grid.cell_count()];

    for start in grid.coords() {
        if extend(grid, &target, start, &mut path, &mut visited) {
            debug_assert!(is_valid_path(&path));
            return path;
        }
    }

    Vec::new()
}

/// True if `path` is a legal trace: every step moves to one of the eight
/// surrounding cells and no cell appears twice
///
/// Empty and single-cell paths are legal. Bounds are the caller's concern;
/// a traced path from [`find_path`] always passes.
///
/// # Examples
/// ```
/// use word_factory::core::Coord;
/// use word_factory::search::is_valid_path;
///
/// assert!(is_valid_path(&[Coord::new(0, 0), Coord::new(1, 1)]));
/// assert!(!is_valid_path(&[Coord::new(0, 0), Coord::new(0, 2)]));
/// ```
#[must_use]
pub fn is_valid_path(path: &[Coord]) -> bool {
    let steps_adjacent = path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]));
    steps_adjacent
        && path
            .iter()
            .enumerate()
            .all(|(i, coord)| !path[..i].contains(coord))
}

fn extend(
    grid: &Grid,
    target: &[u8],
    coord: Coord,
    path: &mut Vec<Coord>,
    visited: &mut [bool],
) -> bool {
    let idx = grid.index(coord);
    if visited[idx] || grid.get(coord) != target[path.len()] {
        return false;
    }

    visited[idx] = true;
    path.push(coord);

    if path.len() == target.len() {
        return true;
    }

    for next in grid.neighbors(coord) {
        if extend(grid, target, next, path, visited) {
            return true;
        }
    }

    visited[idx] = false;
    path.pop();
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Grid {
        Grid::from_rows(&["CGNCA", "AORVR", "XCZDZ", "TEQNU", "NLZOA"]).unwrap()
    }

    fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
        pairs.iter().map(|&p| Coord::from(p)).collect()
    }

    #[test]
    fn finds_expected_path() {
        assert_eq!(
            find_path("CELN", &board()),
            coords(&[(2, 1), (3, 1), (4, 1), (4, 0)])
        );
    }

    #[test]
    fn rejects_wrong_witness() {
        let path = find_path("ZDNO", &board());
        assert_ne!(path, coords(&[(2, 1), (3, 1), (4, 1), (4, 2)]));
        assert_eq!(path, coords(&[(2, 2), (2, 3), (3, 3), (4, 3)]));
    }

    #[test]
    fn first_path_in_traversal_order() {
        // CORD could start at either C next to the O; (0,0) comes first
        assert_eq!(
            find_path("CORD", &board()),
            coords(&[(0, 0), (1, 1), (1, 2), (2, 3)])
        );
        assert_eq!(
            find_path("ACORN", &board()),
            coords(&[(1, 0), (0, 0), (1, 1), (1, 2), (0, 2)])
        );
    }

    #[test]
    fn path_is_adjacent_and_unique() {
        let grid = board();
        let path = find_path("CORN", &grid);
        assert_eq!(grid.spell(&path), "CORN");
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
        let mut sorted = path.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len());
    }

    #[test]
    fn valid_path_rules() {
        assert!(is_valid_path(&[]));
        assert!(is_valid_path(&coords(&[(2, 2)])));
        assert!(is_valid_path(&coords(&[(2, 2), (3, 3), (3, 2)])));
        // Jump of two columns
        assert!(!is_valid_path(&coords(&[(0, 0), (0, 2)])));
        // Staying on the same cell
        assert!(!is_valid_path(&coords(&[(1, 1), (1, 1)])));
        // Adjacent steps that come back to a used cell
        assert!(!is_valid_path(&coords(&[(0, 0), (0, 1), (1, 1), (0, 0)])));
    }

    #[test]
    fn traced_paths_are_valid() {
        let grid = board();
        for word in ["CELN", "ZDNO", "CORD", "ACORN"] {
            assert!(is_valid_path(&find_path(word, &grid)), "{word}");
        }
    }

    #[test]
    fn lowercase_input_matches() {
        assert_eq!(find_path("celn", &board()), find_path("CELN", &board()));
    }

    #[test]
    fn empty_word_gives_empty_path() {
        assert!(find_path("", &board()).is_empty());
    }

    #[test]
    fn missing_word_gives_empty_path() {
        assert!(find_path("BIRD", &board()).is_empty());
        // Letters present but not adjacent
        assert!(find_path("GU", &board()).is_empty());
    }

    #[test]
    fn cells_are_not_reused() {
        let grid = Grid::from_rows(&["AB", "XY"]).unwrap();
        assert!(find_path("ABA", &grid).is_empty());
    }

    #[test]
    fn word_longer_than_grid_gives_empty_path() {
        let grid = Grid::from_rows(&["AA", "AA"]).unwrap();
        assert_eq!(find_path("AAAA", &grid).len(), 4);
        assert!(find_path("AAAAA", &grid).is_empty());
        assert!(find_path(&"A".repeat(26), &board()).is_empty());
    }

    #[test]
    fn single_letter_word() {
        assert_eq!(find_path("Q", &board()), coords(&[(3, 2)]));
        assert_eq!(find_path("C", &board()), coords(&[(0, 0)]));
    }

    #[test]
    fn deterministic_across_calls() {
        let grid = board();
        assert_eq!(find_path("NOR", &grid), find_path("NOR", &grid));
    }
}
