//! Random board generation
//!
//! Letters are drawn independently, with replacement, from the weighted pool
//! of [`LetterDistribution`] and laid out row-major. Generation only needs a
//! source of randomness, so callers pass `rand::rng()` for play or a seeded
//! `StdRng` for reproducible boards.

use crate::core::{BOARD_SIZE, DISTRIBUTION, Grid, LetterDistribution};
use log::trace;
use rand::Rng;

/// Draw `n` letters with replacement from a distribution's weighted pool
///
/// # Panics
/// Panics if the distribution pool is empty, which `LetterDistribution`
/// already rules out at construction.
pub fn generate_letters<R: Rng + ?Sized>(
    rng: &mut R,
    distribution: &LetterDistribution,
    n: usize,
) -> Vec<u8> {
    let pool = distribution.pool();
    assert!(!pool.is_empty(), "letter pool must not be empty");

    (0..n)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

/// Reshape a flat row-major sequence into rows of `dim` elements
///
/// A trailing partial row is kept as-is.
///
/// # Examples
/// ```
/// use word_factory::board::squarify;
///
/// let rows = squarify(2, &[1, 2, 3, 4]);
/// assert_eq!(rows, vec![vec![1, 2], vec![3, 4]]);
/// ```
#[must_use]
pub fn squarify<T: Clone>(dim: usize, items: &[T]) -> Vec<Vec<T>> {
    if dim == 0 {
        return Vec::new();
    }
    items.chunks(dim).map(<[T]>::to_vec).collect()
}

/// Generate a `BOARD_SIZE`×`BOARD_SIZE` board from the default distribution
///
/// # Examples
/// ```
/// use word_factory::board::generate_board;
/// use word_factory::core::BOARD_SIZE;
///
/// let grid = generate_board(&mut rand::rng());
/// assert_eq!(grid.size(), BOARD_SIZE);
/// ```
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    generate_board_with(rng, &DISTRIBUTION, BOARD_SIZE)
}

/// Generate a `size`×`size` board from a custom distribution
///
/// # Panics
/// Panics if `size` is zero.
pub fn generate_board_with<R: Rng + ?Sized>(
    rng: &mut R,
    distribution: &LetterDistribution,
    size: usize,
) -> Grid {
    assert!(size > 0, "board size must be positive");
    let letters = generate_letters(rng, distribution, size * size);
    trace!("Generated letters {}", String::from_utf8_lossy(&letters));

    let rows: Vec<String> = squarify(size, &letters)
        .iter()
        .map(|row| row.iter().map(|&b| b as char).collect())
        .collect();

    // Pool letters are validated A-Z and the count is exact
    match Grid::from_rows(&rows) {
        Ok(grid) => grid,
        Err(e) => unreachable!("generated board is always well-formed: {e}"),
    }
}
