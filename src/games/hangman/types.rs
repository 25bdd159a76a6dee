//! Core domain types for hangman.

use crate::words::{WordError, WordSource};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of turns a fresh game starts with.
///
/// Turns are only spent on incorrect guesses.
pub const STARTING_TURNS: i32 = 10;

/// Complete game state.
///
/// A `GameState` is an immutable snapshot: transitions consume the state and
/// return a fresh one, so callers thread the chain of states themselves and
/// the engine holds nothing between calls.
///
/// The turn counter is signed because calls after the game is lost keep
/// decrementing it (see `make_move`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The hidden target word, fixed for the lifetime of the game.
    pub(super) word: String,
    /// Turns left before the game is lost.
    pub(super) turns_remaining: i32,
    /// Letters guessed that appear in the word, in first-guessed order.
    pub(super) correct_guesses: Vec<char>,
    /// Letters guessed that do not appear in the word, in first-guessed order.
    pub(super) incorrect_guesses: Vec<char>,
}

impl GameState {
    /// Creates a new game for the given word.
    ///
    /// The word is accepted as-is: no case folding and no content
    /// validation. An empty word is tolerated but unwinnable, since no
    /// guess can ever match a character of it.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            turns_remaining: STARTING_TURNS,
            correct_guesses: Vec::new(),
            incorrect_guesses: Vec::new(),
        }
    }

    /// Creates a new game with a word drawn from the given source.
    ///
    /// # Errors
    ///
    /// Surfaces the source's failure, e.g. [`WordError::EmptyCorpus`].
    #[instrument(skip(source))]
    pub fn from_source<S: WordSource>(source: &S) -> Result<Self, WordError> {
        Ok(Self::new(source.pick_word()?))
    }

    /// Returns the hidden word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the number of turns remaining.
    pub fn turns_remaining(&self) -> i32 {
        self.turns_remaining
    }

    /// Returns the correctly guessed letters, in first-guessed order.
    pub fn correct_guesses(&self) -> &[char] {
        &self.correct_guesses
    }

    /// Returns the incorrectly guessed letters, in first-guessed order.
    pub fn incorrect_guesses(&self) -> &[char] {
        &self.incorrect_guesses
    }
}
