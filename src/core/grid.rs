//! Square letter grid for one round
//!
//! A [`Grid`] is an N×N matrix of uppercase ASCII letters stored row-major. It
//! can only be built through validating constructors, so every grid the search
//! sees is non-empty and square.

use super::constants::DIRECTION_OFFSETS;
use std::fmt;
use std::str::FromStr;

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by an offset, returning `None` if the result leaves `[0, size)`
    #[inline]
    #[must_use]
    pub fn offset(self, (dr, dc): (isize, isize), size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Self { row, col })
    }

    /// True if `other` is one of the eight surrounding cells
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr | dc) != 0
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Error type for malformed grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    NotSquare { row: usize, expected: usize, found: usize },
    WrongLetterCount { expected: usize, found: usize },
    InvalidLetter(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must contain at least one cell"),
            Self::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid must be square: row {row} has {found} letters, expected {expected}"
            ),
            Self::WrongLetterCount { expected, found } => {
                write!(f, "Grid needs {expected} letters, got {found}")
            }
            Self::InvalidLetter(c) => write!(f, "Grid cell '{c}' is not an ASCII letter"),
        }
    }
}

impl std::error::Error for GridError {}

/// An N×N board of uppercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from a flat row-major letter sequence
    ///
    /// Letters are upper-cased.
    ///
    /// # Errors
    /// Returns `GridError` if `size` is zero, the letter count is not
    /// `size * size`, or a letter is not ASCII alphabetic.
    pub fn from_letters(size: usize, letters: &[u8]) -> Result<Self, GridError> {
        if size == 0 || letters.is_empty() {
            return Err(GridError::Empty);
        }
        if letters.len() != size * size {
            return Err(GridError::WrongLetterCount {
                expected: size * size,
                found: letters.len(),
            });
        }
        let cells = letters
            .iter()
            .map(|&b| {
                if b.is_ascii_alphabetic() {
                    Ok(b.to_ascii_uppercase())
                } else {
                    Err(GridError::InvalidLetter(b as char))
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self { size, cells })
    }

    /// Build a grid from rows of letters
    ///
    /// # Errors
    /// Returns `GridError` if there are no rows, any row length differs from
    /// the row count, or a cell is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use word_factory::core::Grid;
    ///
    /// let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert!(Grid::from_rows(&["abc", "de"]).is_err());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut letters = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row: Vec<char> = row.as_ref().chars().filter(|c| !c.is_whitespace()).collect();
            if row.len() != size {
                return Err(GridError::NotSquare {
                    row: i,
                    expected: size,
                    found: row.len(),
                });
            }
            for c in row {
                if !c.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter(c));
                }
                letters.push(c as u8);
            }
        }

        Self::from_letters(size, &letters)
    }

    /// Side length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`)
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Letter at a coordinate
    ///
    /// # Panics
    /// Panics if the coordinate is outside the grid
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> u8 {
        assert!(
            coord.row < self.size && coord.col < self.size,
            "{coord} outside {size}x{size} grid",
            size = self.size
        );
        self.cells[self.index(coord)]
    }

    /// Row-major index of a coordinate
    #[inline]
    #[must_use]
    pub const fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// Coordinate of a row-major index
    #[inline]
    #[must_use]
    pub const fn coord(&self, index: usize) -> Coord {
        Coord::new(index / self.size, index % self.size)
    }

    /// All cells as a flat row-major slice
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate rows as byte slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord(i))
    }

    /// In-bounds neighbors of a cell, in `DIRECTION_OFFSETS` order
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        DIRECTION_OFFSETS
            .iter()
            .filter_map(move |&offset| coord.offset(offset, self.size))
    }

    /// Letters along a path, as a string
    #[must_use]
    pub fn spell(&self, path: &[Coord]) -> String {
        path.iter().map(|&c| self.get(c) as char).collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse rows separated by `/`, `,`, `;` or newlines.
    ///
    /// A single unseparated run of letters whose length is a perfect square is
    /// reshaped row-major, so `"CGNCAAORVR..."` works as well as
    /// `"CGNCA/AORVR/..."`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', ',', ';', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if let [single] = rows.as_slice() {
            let letters: Vec<u8> = single
                .bytes()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            let size = letters.len().isqrt();
            if size > 1 && size * size == letters.len() {
                return Self::from_letters(size, &letters);
            }
        }

        Self::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|&b| (b as char).to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Cells to highlight on a grid, kept apart from the grid itself
///
/// Each entry holds the cell's position in the path (0-based), if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    size: usize,
    order: Vec<Option<usize>>,
}

impl Highlight {
    /// Highlight layer for a path on a grid of the given size
    #[must_use]
    pub fn from_path(size: usize, path: &[Coord]) -> Self {
        let mut order = vec![None; size * size];
        for (step, coord) in path.iter().enumerate() {
            if coord.row < size && coord.col < size {
                order[coord.row * size + coord.col] = Some(step);
            }
        }
        Self { size, order }
    }

    /// Position of a cell in the highlighted path
    #[must_use]
    pub fn step(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.order[coord.row * self.size + coord.col]
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.step(coord).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.iter().all(Option::is_none)
    }
}
