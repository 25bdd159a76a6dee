//! Letter membership and word coverage logic for hangman.

use tracing::instrument;

/// Checks if the letter occurs anywhere in the word.
#[instrument]
pub fn contains_letter(word: &str, letter: char) -> bool {
    word.chars().any(|c| c == letter)
}

/// Checks if every character of the word has been guessed.
///
/// A fully covered word means the game is won. An empty word is
/// vacuously covered; the transition function never reaches this check
/// for one, since no guess matches a character of it.
#[instrument(skip(correct_guesses))]
pub fn is_covered(word: &str, correct_guesses: &[char]) -> bool {
    word.chars().all(|c| correct_guesses.contains(&c))
}
