//! First-class invariants for hangman.
//!
//! Invariants are logical properties that must hold for every in-progress
//! game state. They are testable independently and serve as documentation
//! of system guarantees.
//!
//! The terminal lost transition is exempt: it records the final guess
//! without regard to correctness, so a last-turn repeat of a correct
//! letter may legitimately overlap the guess lists.

use super::types::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod disjoint_guesses;
pub mod guess_consistency;
pub mod turn_accounting;

pub use disjoint_guesses::DisjointGuessesInvariant;
pub use guess_consistency::GuessConsistencyInvariant;
pub use turn_accounting::TurnAccountingInvariant;

/// All hangman invariants as a composable set.
pub type HangmanInvariants = (
    DisjointGuessesInvariant,
    GuessConsistencyInvariant,
    TurnAccountingInvariant,
);

/// Asserts that all hangman invariants hold (panic on violation in debug builds).
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        DisjointGuessesInvariant::holds(state),
        "Guess disjointness violated"
    );
    debug_assert!(
        GuessConsistencyInvariant::holds(state),
        "Guess consistency violated"
    );
    debug_assert!(
        TurnAccountingInvariant::holds(state),
        "Turn accounting violated"
    );
}
