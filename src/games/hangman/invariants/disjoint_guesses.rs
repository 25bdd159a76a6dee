//! Disjoint guesses invariant: a letter belongs to at most one list.

use super::super::types::GameState;
use super::Invariant;

/// Invariant: no letter appears in both guess lists.
///
/// A guess is classified exactly once - into the correct list if the
/// letter is in the word, into the incorrect list otherwise. Holds for
/// every in-progress state; the terminal lost transition may breach it
/// by recording the final guess unconditionally.
pub struct DisjointGuessesInvariant;

impl Invariant<GameState> for DisjointGuessesInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .correct_guesses()
            .iter()
            .all(|letter| !state.incorrect_guesses().contains(letter))
    }

    fn description() -> &'static str {
        "Correct and incorrect guesses are disjoint"
    }
}
