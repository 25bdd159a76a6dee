//! Turn accounting invariant: the turn budget is spent honestly.

use super::super::types::{GameState, STARTING_TURNS};
use super::Invariant;

/// Invariant: turns never exceed the starting budget, and the turns
/// spent cover at least one per distinct incorrect letter.
///
/// Spent turns may exceed the incorrect-list length because repeating a
/// bad guess spends a turn without adding a new entry.
pub struct TurnAccountingInvariant;

impl Invariant<GameState> for TurnAccountingInvariant {
    fn holds(state: &GameState) -> bool {
        let spent = STARTING_TURNS - state.turns_remaining();

        state.turns_remaining() <= STARTING_TURNS
            && spent >= state.incorrect_guesses().len() as i32
    }

    fn description() -> &'static str {
        "Turns spent cover the distinct incorrect guesses"
    }
}
