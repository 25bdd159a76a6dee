//! The hangman transition function and its query companions.
//!
//! `make_move` consumes the current state and returns a [`MoveResult`]
//! carrying the successor state, so every transition produces a fresh
//! immutable snapshot and the caller threads the chain.

use super::action::Guess;
use super::invariants::assert_invariants;
use super::outcome::Outcome;
use super::rules;
use super::types::GameState;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Transition result
// ─────────────────────────────────────────────────────────────

/// Result of one guess attempt: the successor state, the outcome
/// classification, and the guess echoed back.
///
/// The `guess` field is `Some` for the non-terminal classifications
/// (`good_guess`, `bad_guess`) and `None` once the game is decided
/// (`won`, `lost`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    state: GameState,
    outcome: Outcome,
    guess: Option<char>,
}

impl MoveResult {
    /// Returns the successor state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the result, yielding the successor state for the next move.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Returns the outcome classification.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the echoed guess, `None` for terminal outcomes.
    pub fn guess(&self) -> Option<char> {
        self.guess
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Applies a guess, consuming the state and returning the transition.
    ///
    /// Branch precedence, deliberately in this order:
    /// 1. `turns_remaining <= 1`: the final turn is consumed and the game
    ///    is lost, *before* guess correctness is evaluated. A correct
    ///    letter on the last turn still loses.
    /// 2. Letter in word, word now fully covered: won.
    /// 3. Letter in word, word not yet covered: good guess, no turn spent.
    /// 4. Letter not in word: bad guess, one turn spent. Repeating an
    ///    already-tried bad letter spends a turn again.
    ///
    /// Re-guessing a correct letter is idempotent: membership is set-based,
    /// so no turn is spent and no duplicate entry is recorded.
    ///
    /// Calling this on a finished game is tolerated: the branch logic runs
    /// against the terminal state (after a loss the turn counter keeps
    /// falling and the outcome repeats `lost`).
    #[instrument(skip(self), fields(guess = %guess, turns_remaining = self.turns_remaining))]
    pub fn make_move(mut self, guess: Guess) -> MoveResult {
        let letter = guess.letter();

        // Out of turns: the last turn is spent on this guess no matter
        // what the letter is.
        if self.turns_remaining <= 1 {
            if !self.incorrect_guesses.contains(&letter) {
                self.incorrect_guesses.push(letter);
            }
            self.turns_remaining -= 1;
            return MoveResult {
                state: self,
                outcome: Outcome::Lost,
                guess: None,
            };
        }

        let result = if rules::contains_letter(&self.word, letter) {
            if !self.correct_guesses.contains(&letter) {
                self.correct_guesses.push(letter);
            }
            if rules::is_covered(&self.word, &self.correct_guesses) {
                MoveResult {
                    state: self,
                    outcome: Outcome::Won,
                    guess: None,
                }
            } else {
                MoveResult {
                    state: self,
                    outcome: Outcome::GoodGuess,
                    guess: Some(letter),
                }
            }
        } else {
            if !self.incorrect_guesses.contains(&letter) {
                self.incorrect_guesses.push(letter);
            }
            self.turns_remaining -= 1;
            MoveResult {
                state: self,
                outcome: Outcome::BadGuess,
                guess: Some(letter),
            }
        };

        // Postcondition: invariants hold for every non-lost transition
        // (debug builds only). The lost branch above is exempt because it
        // records the final guess without regard to correctness.
        assert_invariants(&result.state);

        result
    }

    /// Applies a sequence of guesses to a fresh game for `word`, returning
    /// the transcript of transitions.
    ///
    /// Stops after the first terminal outcome; remaining guesses are
    /// ignored.
    #[instrument(skip(word, guesses))]
    pub fn replay(word: impl Into<String>, guesses: &[char]) -> Vec<MoveResult> {
        let mut state = GameState::new(word);
        let mut transcript = Vec::with_capacity(guesses.len());

        for &letter in guesses {
            let result = state.make_move(Guess::new(letter));
            let done = result.outcome().is_terminal();
            state = result.state().clone();
            transcript.push(result);
            if done {
                break;
            }
        }

        transcript
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Returns the character count of the hidden word.
    pub fn word_length(&self) -> usize {
        self.word.chars().count()
    }

    /// Returns every guessed letter, correct guesses first, each group in
    /// first-guessed order.
    pub fn letters_used(&self) -> Vec<char> {
        self.correct_guesses
            .iter()
            .chain(self.incorrect_guesses.iter())
            .copied()
            .collect()
    }

    /// Returns the number of turns remaining, verbatim.
    pub fn turns_left(&self) -> i32 {
        self.turns_remaining
    }

    /// Renders the word, characters joined by single spaces.
    ///
    /// With `reveal` set, every character is shown regardless of guesses;
    /// otherwise unguessed characters appear as underscores.
    pub fn render_word(&self, reveal: bool) -> String {
        if reveal {
            rules::revealed(&self.word)
        } else {
            rules::masked(&self.word, &self.correct_guesses)
        }
    }

    /// Returns true if every character of the word has been guessed.
    pub fn is_solved(&self) -> bool {
        rules::is_covered(&self.word, &self.correct_guesses)
    }
}
