//! Game rules for hangman.
//!
//! This module contains pure functions for evaluating guesses and
//! rendering the word. Rules are separated from state storage so they
//! can be tested independently and composed by the transition function.

pub mod coverage;
pub mod mask;

pub use coverage::{contains_letter, is_covered};
pub use mask::{masked, revealed};
