//! Reducer for the request lifecycle.

use crate::generation::GenerationResult;
use crate::ui::mvi::Reducer;

use super::intent::LifecycleIntent;
use super::state::LifecycleState;

/// Reducer for lifecycle state transitions.
///
/// The content guard lives in `App::submit`; this reducer only enforces that
/// one call is outstanding at a time and that results match that call.
pub struct LifecycleReducer;

impl Reducer for LifecycleReducer {
    type State = LifecycleState;
    type Intent = LifecycleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LifecycleIntent::Submit { ticket } => match state {
                LifecycleState::Submitting { .. } => state,
                // Entering Submitting drops any previous reply or error.
                _ => LifecycleState::Submitting { ticket },
            },

            LifecycleIntent::Resolved { ticket, result } => match state {
                LifecycleState::Submitting { ticket: outstanding } if outstanding == ticket => {
                    match result {
                        GenerationResult::Success(reply) => LifecycleState::Succeeded { reply },
                        GenerationResult::Failure(reason) => LifecycleState::Failed { reason },
                    }
                }
                other => other,
            },
        }
    }
}
