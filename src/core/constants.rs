//! Game constants shared by the generator, search and scorer.

/// Side length of a generated board
pub const BOARD_SIZE: usize = 5;

/// Shortest word accepted into the dictionary and worth points
pub const MINIMUM_WORD_LENGTH: usize = 4;

/// Default round length in seconds
pub const DEFAULT_TIME: u64 = 60;

/// Neighbor offsets as `(row, col)` deltas.
///
/// Orthogonal directions first (down, right, up, left), then the diagonals
/// (down-right, up-left, up-right, down-left). Both searches walk neighbors in
/// exactly this order, which decides the witness path `find_path` returns.
pub const DIRECTION_OFFSETS: [(isize, isize); 8] = [
    // adjacents
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    // diagonals
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_distinct_unit_steps() {
        for (i, &(dr, dc)) in DIRECTION_OFFSETS.iter().enumerate() {
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
            assert_ne!((dr, dc), (0, 0));
            assert!(!DIRECTION_OFFSETS[i + 1..].contains(&(dr, dc)));
        }
    }

    #[test]
    fn orthogonal_before_diagonal() {
        assert!(DIRECTION_OFFSETS[..4].iter().all(|&(dr, dc)| dr == 0 || dc == 0));
        assert!(DIRECTION_OFFSETS[4..].iter().all(|&(dr, dc)| dr != 0 && dc != 0));
    }
}
