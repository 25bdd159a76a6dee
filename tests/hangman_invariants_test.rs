//! Invariant checks across states reachable through the public API.

use strictly_hangman::{
    GameState, Guess, HangmanInvariants, InvariantSet, Outcome, WordList, WordSource,
};

#[test]
fn test_invariants_hold_for_fresh_games() {
    let state = GameState::new("freeze");
    assert!(HangmanInvariants::check_all(&state).is_ok());

    let words = WordList::builtin();
    let state = GameState::from_source(&words).expect("builtin corpus is non-empty");
    assert!(HangmanInvariants::check_all(&state).is_ok());
}

#[test]
fn test_invariants_hold_along_a_full_game() {
    let mut state = GameState::new("freeze");

    for letter in ['e', 'q', 'r', 'b', 'f'] {
        let result = state.make_move(Guess::new(letter));
        assert!(HangmanInvariants::check_all(result.state()).is_ok());
        state = result.into_state();
    }

    let result = state.make_move(Guess::new('z'));
    assert_eq!(result.outcome(), Outcome::Won);
    assert!(HangmanInvariants::check_all(result.state()).is_ok());
}

#[test]
fn test_invariants_hold_after_repeated_guesses() {
    let mut state = GameState::new("freeze");

    for letter in ['e', 'e', 'q', 'q', 'q'] {
        state = state.make_move(Guess::new(letter)).into_state();
    }

    assert!(HangmanInvariants::check_all(&state).is_ok());
}

#[test]
fn test_word_source_seeds_valid_states() {
    let words = WordList::new(vec!["puzzle".to_string()]);
    let word = words.pick_word().expect("single-word corpus");
    assert_eq!(word, "puzzle");

    let state = GameState::from_source(&words).expect("single-word corpus");
    assert_eq!(state.word_length(), 6);
    assert!(HangmanInvariants::check_all(&state).is_ok());
}
