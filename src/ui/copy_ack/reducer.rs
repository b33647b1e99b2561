//! Reducer for the copy acknowledgement.

use crate::ui::mvi::Reducer;

use super::intent::CopyAckIntent;
use super::state::CopyAckState;

pub struct CopyAckReducer;

impl Reducer for CopyAckReducer {
    type State = CopyAckState;
    type Intent = CopyAckIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CopyAckIntent::Copied => CopyAckState::copied(state.epoch().wrapping_add(1)),
            CopyAckIntent::Expired { epoch } if epoch == state.epoch() => state.cleared(),
            CopyAckIntent::Expired { .. } => state,
        }
    }
}
