//! Strictly Hangman library - pure hangman game logic
//!
//! # Architecture
//!
//! - **Engine**: stateless transition function over immutable game states
//! - **Rules**: pure guess evaluation and word rendering
//! - **Invariants**: first-class, debug-checked system guarantees
//! - **Words**: the word-source collaborator that seeds new games
//!
//! The engine holds no state between calls: a collaborator constructs a
//! [`GameState`] (optionally with a fixed word for reproducibility) and
//! threads the chain of states through [`GameState::make_move`] until the
//! [`Outcome`] is terminal.
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GameState, Guess, Outcome};
//!
//! let state = GameState::new("freeze");
//! let result = state.make_move(Guess::new('e'));
//!
//! assert_eq!(result.outcome(), Outcome::GoodGuess);
//! assert_eq!(result.state().render_word(false), "_ _ e e _ e");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod words;

// Crate-level exports - Game types (hangman)
pub use games::hangman::{GameState, Guess, MoveResult, Outcome, STARTING_TURNS};

// Crate-level exports - Invariants
pub use games::hangman::invariants::{
    DisjointGuessesInvariant, GuessConsistencyInvariant, HangmanInvariants, Invariant,
    InvariantSet, InvariantViolation, TurnAccountingInvariant,
};

// Crate-level exports - Word sources
pub use words::{WordError, WordList, WordSource};
