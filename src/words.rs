//! Word sources for new games.
//!
//! The engine only needs something that can pick a word; everything about
//! corpus size, distribution, or fairness is the source's business.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised by a word source.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WordError {
    /// The corpus has no words to pick from.
    #[display("Word corpus is empty")]
    EmptyCorpus,
}

impl std::error::Error for WordError {}

/// A provider of hidden words for new games.
pub trait WordSource {
    /// Picks a word from the corpus.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::EmptyCorpus`] if there is nothing to pick.
    fn pick_word(&self) -> Result<String, WordError>;
}

/// Built-in corpus, lowercase so clients can normalize input with a plain
/// lowercase fold.
const BUILTIN_WORDS: &[&str] = &[
    "anchor", "breeze", "candle", "dragon", "engine", "freeze", "garden",
    "hollow", "island", "jungle", "kernel", "lantern", "marble", "needle",
    "orange", "pepper", "quartz", "ribbon", "saddle", "temple", "umbrella",
    "velvet", "walnut", "yellow", "zephyr", "basket", "cobalt", "donkey",
    "ember", "falcon", "glacier", "hammer", "iguana", "jacket", "kettle",
    "lizard", "magnet", "nutmeg", "oyster", "puzzle", "quiver", "rocket",
    "spider", "thunder", "utensil", "violin", "whisper", "xylophone",
    "yogurt", "zipper",
];

/// A word list with uniform random selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Creates a word list from the given words.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Creates the built-in word list.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// Returns the number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordSource for WordList {
    #[instrument(skip(self))]
    fn pick_word(&self) -> Result<String, WordError> {
        if self.words.is_empty() {
            return Err(WordError::EmptyCorpus);
        }

        let index = rand::rng().random_range(0..self.words.len());
        Ok(self.words[index].clone())
    }
}
