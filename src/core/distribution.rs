//! Letter frequency table used to draw board letters
//!
//! Weights are relative counts in the style of a Boggle cube set. They are not
//! probabilities; [`LetterDistribution::probability`] normalizes them.

/// Relative weight for every letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterDistribution {
    weights: [(u8, u32); 26],
}

/// Default distribution (total weight 98)
pub const DISTRIBUTION: LetterDistribution = LetterDistribution::new([
    (b'A', 9),
    (b'B', 2),
    (b'C', 2),
    (b'D', 4),
    (b'E', 12),
    (b'F', 2),
    (b'G', 3),
    (b'H', 2),
    (b'I', 9),
    (b'J', 1),
    (b'K', 1),
    (b'L', 4),
    (b'M', 2),
    (b'N', 6),
    (b'O', 8),
    (b'P', 2),
    (b'Q', 1),
    (b'R', 6),
    (b'S', 4),
    (b'T', 6),
    (b'U', 4),
    (b'V', 2),
    (b'W', 2),
    (b'X', 1),
    (b'Y', 2),
    (b'Z', 1),
]);

impl LetterDistribution {
    /// Create a distribution from `(letter, weight)` pairs
    ///
    /// # Panics
    /// Panics (at compile time for `const` tables) if a letter is not uppercase
    /// ASCII or a weight is zero. A broken table is a programming error.
    #[must_use]
    pub const fn new(weights: [(u8, u32); 26]) -> Self {
        let mut i = 0;
        while i < weights.len() {
            assert!(weights[i].0.is_ascii_uppercase(), "letters must be A-Z");
            assert!(weights[i].1 > 0, "weights must be positive");
            i += 1;
        }
        Self { weights }
    }

    /// Iterate `(letter, weight)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.weights.iter().copied()
    }

    /// Weight of a letter, or 0 if it is not in the table
    #[must_use]
    pub fn weight(&self, letter: u8) -> u32 {
        let letter = letter.to_ascii_uppercase();
        self.iter()
            .find(|&(l, _)| l == letter)
            .map_or(0, |(_, w)| w)
    }

    /// Sum of all weights
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.iter().map(|(_, w)| w).sum()
    }

    /// Long-run frequency of a letter on generated boards
    #[must_use]
    pub fn probability(&self, letter: u8) -> f64 {
        f64::from(self.weight(letter)) / f64::from(self.total_weight())
    }

    /// Flat sampling pool with each letter repeated `weight` times
    ///
    /// # Examples
    /// ```
    /// use word_factory::core::DISTRIBUTION;
    ///
    /// let pool = DISTRIBUTION.pool();
    /// assert_eq!(pool.len(), 98);
    /// assert_eq!(pool.iter().filter(|&&c| c == b'E').count(), 12);
    /// ```
    #[must_use]
    pub fn pool(&self) -> Vec<u8> {
        self.iter()
            .flat_map(|(letter, weight)| std::iter::repeat_n(letter, weight as usize))
            .collect()
    }
}

impl Default for LetterDistribution {
    fn default() -> Self {
        DISTRIBUTION
    }
}
