//! Guess consistency invariant: lists agree with the word.

use super::super::types::GameState;
use super::Invariant;
use crate::games::hangman::rules::contains_letter;

/// Invariant: every correct guess occurs in the word, and no incorrect
/// guess does.
///
/// Holds for every in-progress state; the terminal lost transition may
/// breach the second half by recording a final guess that happens to be
/// a correct letter.
pub struct GuessConsistencyInvariant;

impl Invariant<GameState> for GuessConsistencyInvariant {
    fn holds(state: &GameState) -> bool {
        let correct_in_word = state
            .correct_guesses()
            .iter()
            .all(|&letter| contains_letter(state.word(), letter));
        let incorrect_not_in_word = state
            .incorrect_guesses()
            .iter()
            .all(|&letter| !contains_letter(state.word(), letter));

        correct_in_word && incorrect_not_in_word
    }

    fn description() -> &'static str {
        "Correct guesses occur in the word, incorrect guesses do not"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::Guess;

    #[test]
    fn test_fresh_game_holds() {
        let state = GameState::new("freeze");
        assert!(GuessConsistencyInvariant::holds(&state));
    }

    #[test]
    fn test_played_game_holds() {
        let state = GameState::new("freeze");
        let state = state.make_move(Guess::new('e')).into_state();
        let state = state.make_move(Guess::new('q')).into_state();
        let state = state.make_move(Guess::new('r')).into_state();

        assert!(GuessConsistencyInvariant::holds(&state));
    }

    #[test]
    fn test_misfiled_correct_guess_violates() {
        let mut state = GameState::new("freeze");
        state.correct_guesses.push('q');

        assert!(!GuessConsistencyInvariant::holds(&state));
    }

    #[test]
    fn test_misfiled_incorrect_guess_violates() {
        let mut state = GameState::new("freeze");
        state.incorrect_guesses.push('e');

        assert!(!GuessConsistencyInvariant::holds(&state));
    }
}
