//! First-class action type for hangman.
//!
//! Guesses are domain events, not side effects. They represent the
//! player's intent and can be validated, serialized, and logged
//! independently of execution.

use serde::{Deserialize, Serialize};

/// A guess in hangman: the player naming a single letter.
///
/// The engine performs no case folding - callers normalize the letter
/// consistently with how the hidden word is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed letter.
    pub letter: char,
}

impl Guess {
    /// Creates a new guess.
    pub fn new(letter: char) -> Self {
        Self { letter }
    }

    /// Returns the guessed letter.
    pub fn letter(&self) -> char {
        self.letter
    }
}

impl From<char> for Guess {
    fn from(letter: char) -> Self {
        Self::new(letter)
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.letter)
    }
}
