//! Outcome classification for a single guess attempt.

use serde::{Deserialize, Serialize};

/// Outcome of one guess attempt.
///
/// This is a closed enumeration: the transition function produces no
/// other values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The guess completed the word.
    Won,
    /// The guess consumed the last turn.
    Lost,
    /// The letter is in the word, but the word is not complete yet.
    GoodGuess,
    /// The letter is not in the word.
    BadGuess,
}

impl Outcome {
    /// Returns true if the game is over after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost)
    }

    /// Returns true if the guessed letter was in the word.
    ///
    /// Note that a [`Outcome::Lost`] classification says nothing about
    /// the letter itself: the out-of-turns branch fires before guess
    /// correctness is evaluated.
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Won | Outcome::GoodGuess)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "won"),
            Outcome::Lost => write!(f, "lost"),
            Outcome::GoodGuess => write!(f, "good guess"),
            Outcome::BadGuess => write!(f, "bad guess"),
        }
    }
}
