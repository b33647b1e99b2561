//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// Must be pure: no I/O, no task spawning, no clock reads.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Apply one intent and return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
