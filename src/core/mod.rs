//! Core domain types for the word-search board
//!
//! Constants, the letter distribution and the grid. Everything here is pure
//! data with no I/O and no randomness.

pub mod constants;
mod distribution;
mod grid;

pub use constants::{BOARD_SIZE, DEFAULT_TIME, DIRECTION_OFFSETS, MINIMUM_WORD_LENGTH};
pub use distribution::{DISTRIBUTION, LetterDistribution};
pub use grid::{Coord, Grid, GridError, Highlight};
