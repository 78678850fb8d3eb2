//! One round of play
//!
//! A [`Round`] holds the board and each player's submissions. It does not
//! own a clock: the caller decides when time is up and calls
//! [`Round::finish`].

use crate::board::generate_board;
use crate::core::{Coord, Grid};
use crate::dictionary::Trie;
use crate::scoring::ScoreBreakdown;
use crate::search::{find_all_words, find_path};
use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Standby,
    Playing,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standby => "standby",
            Self::Playing => "playing",
            Self::Finished => "finished",
        };
        write!(f, "{name}")
    }
}

/// Error type for actions that do not fit the round's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    NotPlaying(GameStatus),
    EmptyWord,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlaying(status) => write!(f, "Round is not in play (status: {status})"),
            Self::EmptyWord => write!(f, "Cannot submit an empty word"),
        }
    }
}

impl std::error::Error for RoundError {}

/// Final standing of one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    pub player: String,
    pub breakdown: ScoreBreakdown,
}

impl PlayerResult {
    /// Net score, possibly negative
    #[must_use]
    pub const fn raw_score(&self) -> i64 {
        self.breakdown.total
    }

    /// Score shown to the player, floored at zero
    #[must_use]
    pub fn score(&self) -> i64 {
        self.breakdown.total.max(0)
    }
}

/// Everything known once a round is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub board: Grid,
    pub valid_words: Vec<String>,
    pub players: Vec<PlayerResult>,
}

impl RoundSummary {
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.player == name)
    }
}

/// A board plus the words each player entered on it
#[derive(Debug, Clone, Default)]
pub struct Round {
    status: GameStatus,
    board: Option<Grid>,
    moves: BTreeMap<String, Vec<String>>,
}

impl Round {
    /// A round waiting to start
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh board and start playing, clearing previous moves
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.start_with_board(generate_board(rng));
    }

    /// Start playing on a given board, clearing previous moves
    pub fn start_with_board(&mut self, board: Grid) {
        debug!("Starting round on board\n{board}");
        self.board = Some(board);
        self.moves.clear();
        self.status = GameStatus::Playing;
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn board(&self) -> Option<&Grid> {
        self.board.as_ref()
    }

    /// Words a player has entered so far, in order
    #[must_use]
    pub fn moves(&self, player: &str) -> &[String] {
        self.moves.get(player).map(Vec::as_slice).unwrap_or_default()
    }

    /// Record a submission for `player`
    ///
    /// The word is trimmed and upper-cased. It is not checked against the
    /// dictionary here; invalid words are penalized when the round finishes.
    ///
    /// # Errors
    /// Returns `RoundError::NotPlaying` outside of play and
    /// `RoundError::EmptyWord` for blank input.
    pub fn enter_word(&mut self, player: &str, word: &str) -> Result<(), RoundError> {
        if self.status != GameStatus::Playing {
            return Err(RoundError::NotPlaying(self.status));
        }
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return Err(RoundError::EmptyWord);
        }

        self.moves.entry(player.to_string()).or_default().push(word);
        Ok(())
    }

    /// Path to highlight for text being typed; empty without a board
    #[must_use]
    pub fn highlight(&self, word: &str) -> Vec<Coord> {
        self.board
            .as_ref()
            .map(|board| find_path(word, board))
            .unwrap_or_default()
    }

    /// End the round, find every valid word and score each player
    ///
    /// # Errors
    /// Returns `RoundError::NotPlaying` if the round is not in play.
    pub fn finish(&mut self, trie: &Trie) -> Result<RoundSummary, RoundError> {
        let board = match (&self.status, &self.board) {
            (GameStatus::Playing, Some(board)) => board.clone(),
            _ => return Err(RoundError::NotPlaying(self.status)),
        };
        self.status = GameStatus::Finished;

        let valid_words = find_all_words(&board, trie);
        let players: Vec<PlayerResult> = self
            .moves
            .iter()
            .map(|(player, words)| PlayerResult {
                player: player.clone(),
                breakdown: ScoreBreakdown::new(words.as_slice(), valid_words.as_slice()),
            })
            .collect();

        info!(
            "Round finished: {} valid words, {} players",
            valid_words.len(),
            players.len()
        );

        Ok(RoundSummary {
            board,
            valid_words,
            players,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board() -> Grid {
        Grid::from_rows(&["CGNCA", "AORVR", "XCZDZ", "TEQNU", "NLZOA"]).unwrap()
    }

    fn trie() -> Trie {
        Trie::build(["acorn", "card", "cord", "corn", "coca", "bird"])
    }

    #[test]
    fn new_round_is_standby() {
        let round = Round::new();
        assert_eq!(round.status(), GameStatus::Standby);
        assert!(round.board().is_none());
        assert!(round.highlight("CORN").is_empty());
    }

    #[test]
    fn cannot_enter_words_before_start() {
        let mut round = Round::new();
        assert_eq!(
            round.enter_word("Player", "CORN"),
            Err(RoundError::NotPlaying(GameStatus::Standby))
        );
    }

    #[test]
    fn start_generates_board() {
        let mut round = Round::new();
        round.start(&mut StdRng::seed_from_u64(3));
        assert_eq!(round.status(), GameStatus::Playing);
        assert_eq!(round.board().map(Grid::size), Some(crate::core::BOARD_SIZE));
    }

    #[test]
    fn enter_word_normalizes_and_keeps_order() {
        let mut round = Round::new();
        round.start_with_board(board());
        round.enter_word("Player", " corn ").unwrap();
        round.enter_word("Player", "ACORN").unwrap();
        assert_eq!(round.moves("Player"), ["CORN", "ACORN"]);
        assert!(round.moves("Nobody").is_empty());
    }

    #[test]
    fn enter_word_rejects_blank() {
        let mut round = Round::new();
        round.start_with_board(board());
        assert_eq!(round.enter_word("Player", "   "), Err(RoundError::EmptyWord));
    }

    #[test]
    fn highlight_uses_board() {
        let mut round = Round::new();
        round.start_with_board(board());
        assert_eq!(
            round.highlight("celn"),
            vec![
                Coord::new(2, 1),
                Coord::new(3, 1),
                Coord::new(4, 1),
                Coord::new(4, 0)
            ]
        );
    }

    #[test]
    fn finish_scores_every_player() {
        let mut round = Round::new();
        round.start_with_board(board());
        round.enter_word("Ann", "ACORN").unwrap();
        round.enter_word("Ann", "CORD").unwrap();
        round.enter_word("Ann", "BIRD").unwrap();
        round.enter_word("Bo", "ZZZZ").unwrap();
        round.enter_word("Bo", "ZZZZ").unwrap();

        let summary = round.finish(&trie()).unwrap();
        assert_eq!(round.status(), GameStatus::Finished);
        assert_eq!(summary.valid_words, vec!["ACORN", "CARD", "COCA", "CORD", "CORN"]);

        let ann = summary.player("Ann").unwrap();
        assert_eq!(ann.raw_score(), 2 + 1 - 1);
        assert_eq!(ann.score(), 2);

        let bo = summary.player("Bo").unwrap();
        assert_eq!(bo.raw_score(), -2);
        assert_eq!(bo.score(), 0);
    }

    #[test]
    fn no_words_after_finish() {
        let mut round = Round::new();
        round.start_with_board(board());
        round.finish(&trie()).unwrap();
        assert_eq!(
            round.enter_word("Player", "CORN"),
            Err(RoundError::NotPlaying(GameStatus::Finished))
        );
        assert!(round.finish(&trie()).is_err());
    }

    #[test]
    fn restart_clears_moves() {
        let mut round = Round::new();
        round.start_with_board(board());
        round.enter_word("Player", "CORN").unwrap();
        round.finish(&trie()).unwrap();

        round.start_with_board(board());
        assert_eq!(round.status(), GameStatus::Playing);
        assert!(round.moves("Player").is_empty());
    }

    #[test]
    fn board_without_words_penalizes_everything() {
        let mut round = Round::new();
        round.start_with_board(Grid::from_rows(&["QQQQQ"; 5]).unwrap());
        round.enter_word("Player", "CORN").unwrap();
        round.enter_word("Player", "QQQQ").unwrap();

        let summary = round.finish(&trie()).unwrap();
        assert!(summary.valid_words.is_empty());
        assert_eq!(summary.player("Player").unwrap().raw_score(), -2);
    }
}
