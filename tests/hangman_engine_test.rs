//! Tests for the hangman transition function.

use strictly_hangman::{GameState, Guess, Outcome, STARTING_TURNS};

/// Applies a guess and returns the transition result.
fn guess(state: GameState, letter: char) -> strictly_hangman::MoveResult {
    state.make_move(Guess::new(letter))
}

#[test]
fn test_freeze_scenario() {
    let state = GameState::new("freeze");
    assert_eq!(state.turns_left(), 10);

    let result = guess(state, 'e');
    assert_eq!(result.outcome(), Outcome::GoodGuess);
    assert_eq!(result.guess(), Some('e'));
    assert!(result.outcome().is_hit());
    assert_eq!(result.state().render_word(false), "_ _ e e _ e");

    let result = guess(result.into_state(), 'q');
    assert_eq!(result.outcome(), Outcome::BadGuess);
    assert!(!result.outcome().is_hit());
    assert_eq!(result.state().turns_left(), 9);

    let result = guess(result.into_state(), 'r');
    assert_eq!(result.outcome(), Outcome::GoodGuess);
    assert_eq!(result.state().render_word(false), "_ r e e _ e");

    let result = guess(result.into_state(), 'b');
    assert_eq!(result.outcome(), Outcome::BadGuess);
    assert_eq!(result.state().turns_left(), 8);

    let result = guess(result.into_state(), 'f');
    assert_eq!(result.outcome(), Outcome::GoodGuess);
    assert_eq!(result.state().render_word(false), "f r e e _ e");

    let result = guess(result.into_state(), 'z');
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(result.guess(), None);
    assert_eq!(result.state().turns_left(), 8);
}

#[test]
fn test_winning_spends_no_turns() {
    let mut state = GameState::new("apple");

    for letter in ['a', 'p', 'l'] {
        let result = guess(state, letter);
        assert_eq!(result.outcome(), Outcome::GoodGuess);
        assert_eq!(result.state().turns_left(), STARTING_TURNS);
        state = result.into_state();
    }

    let result = guess(state, 'e');
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(result.state().turns_left(), STARTING_TURNS);
}

#[test]
fn test_ten_bad_guesses_lose() {
    let mut state = GameState::new("freeze");

    for (index, letter) in ['a', 'b', 'c', 'd', 'g', 'h', 'i', 'j', 'k'].iter().enumerate() {
        let result = guess(state, *letter);
        assert_eq!(result.outcome(), Outcome::BadGuess);
        assert_eq!(result.state().turns_left(), 10 - (index as i32 + 1));
        state = result.into_state();
    }
    assert_eq!(state.turns_left(), 1);

    // The tenth bad guess is consumed by the out-of-turns branch.
    let result = guess(state, 'l');
    assert_eq!(result.outcome(), Outcome::Lost);
    assert_eq!(result.guess(), None);
    assert_eq!(result.state().turns_left(), 0);
}

#[test]
fn test_out_of_turns_beats_correct_letter() {
    let mut state = GameState::new("freeze");

    for letter in ['a', 'b', 'c', 'd', 'g', 'h', 'i', 'j', 'k'] {
        state = guess(state, letter).into_state();
    }
    assert_eq!(state.turns_left(), 1);

    // 'f' is in the word, but the turn check fires first.
    let result = guess(state, 'f');
    assert_eq!(result.outcome(), Outcome::Lost);
    assert_eq!(result.guess(), None);
    assert_eq!(result.state().turns_left(), 0);
    assert!(result.state().incorrect_guesses().contains(&'f'));
}

#[test]
fn test_repeat_correct_guess_is_idempotent() {
    let state = GameState::new("freeze");
    let state = guess(state, 'e').into_state();

    let result = guess(state, 'e');
    assert_eq!(result.outcome(), Outcome::GoodGuess);
    assert_eq!(result.state().turns_left(), STARTING_TURNS);
    assert_eq!(result.state().correct_guesses(), &['e']);
}

#[test]
fn test_repeat_bad_guess_spends_a_turn_again() {
    let state = GameState::new("freeze");
    let state = guess(state, 'q').into_state();
    assert_eq!(state.turns_left(), 9);

    let result = guess(state, 'q');
    assert_eq!(result.outcome(), Outcome::BadGuess);
    assert_eq!(result.state().turns_left(), 8);
    // The penalty repeats; the recorded list does not.
    assert_eq!(result.state().incorrect_guesses(), &['q']);
}

#[test]
fn test_single_letter_word_wins_immediately() {
    let result = guess(GameState::new("a"), 'a');
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(result.guess(), None);
}

#[test]
fn test_moves_after_loss_do_not_panic() {
    let mut state = GameState::new("z");
    for _ in 0..9 {
        state = guess(state, 'x').into_state();
    }

    let result = guess(state, 'x');
    assert_eq!(result.outcome(), Outcome::Lost);
    assert_eq!(result.state().turns_left(), 0);

    // Tolerated quirk: the engine keeps producing lost transitions and the
    // turn counter keeps falling.
    let result = guess(result.into_state(), 'z');
    assert_eq!(result.outcome(), Outcome::Lost);
    assert_eq!(result.state().turns_left(), -1);
}

#[test]
fn test_moves_after_win_do_not_panic() {
    let result = guess(GameState::new("ab"), 'a');
    let result = guess(result.into_state(), 'b');
    assert_eq!(result.outcome(), Outcome::Won);

    // The word stays covered, so another in-word letter reports won again.
    let result = guess(result.into_state(), 'a');
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(result.state().turns_left(), STARTING_TURNS);
}

#[test]
fn test_letters_used_orders_correct_before_incorrect() {
    let state = GameState::new("freeze");
    let state = guess(state, 'q').into_state();
    let state = guess(state, 'e').into_state();
    let state = guess(state, 'x').into_state();
    let state = guess(state, 'r').into_state();

    assert_eq!(state.letters_used(), vec!['e', 'r', 'q', 'x']);
}

#[test]
fn test_replay_transcript() {
    let transcript = GameState::replay("freeze", &['e', 'q', 'r', 'b', 'f', 'z']);

    assert_eq!(transcript.len(), 6);
    let outcomes: Vec<Outcome> = transcript.iter().map(|r| r.outcome()).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::GoodGuess,
            Outcome::BadGuess,
            Outcome::GoodGuess,
            Outcome::BadGuess,
            Outcome::GoodGuess,
            Outcome::Won,
        ]
    );
}

#[test]
fn test_replay_stops_at_terminal_outcome() {
    let transcript = GameState::replay("ab", &['a', 'b', 'x', 'y']);

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].outcome(), Outcome::Won);
}

#[test]
fn test_state_survives_serialization() {
    let state = GameState::new("freeze");
    let state = guess(state, 'e').into_state();
    let state = guess(state, 'q').into_state();

    let json = serde_json::to_string(&state).expect("state serializes");
    let restored: GameState = serde_json::from_str(&json).expect("state deserializes");
    assert_eq!(restored, state);

    // The restored state behaves identically.
    let result = restored.make_move(Guess::new('r'));
    assert_eq!(result.outcome(), Outcome::GoodGuess);
    assert_eq!(result.state().render_word(false), "_ r e e _ e");
}
