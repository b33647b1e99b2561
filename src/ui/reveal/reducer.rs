//! Reducer for the reveal sequence.

use crate::ui::mvi::Reducer;

use super::intent::RevealIntent;
use super::state::RevealFlags;

pub struct RevealReducer;

impl Reducer for RevealReducer {
    type State = RevealFlags;
    type Intent = RevealIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RevealIntent::Start => RevealFlags {
                title_visible: true,
                ..state
            },
            RevealIntent::FormDelayElapsed => RevealFlags {
                form_visible: true,
                ..state
            },
            RevealIntent::ReplyAvailable => RevealFlags {
                reply_visible: true,
                ..state
            },
            RevealIntent::ReplyWithdrawn => RevealFlags {
                reply_visible: false,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_visible_before_start() {
        assert_eq!(
            RevealFlags::default(),
            RevealFlags {
                title_visible: false,
                form_visible: false,
                reply_visible: false,
            }
        );
    }

    #[test]
    fn start_shows_title_only() {
        let new = RevealReducer::reduce(RevealFlags::default(), RevealIntent::Start);
        assert!(new.title_visible);
        assert!(!new.form_visible);
        assert!(!new.reply_visible);
    }

    #[test]
    fn form_delay_shows_form() {
        let state = RevealReducer::reduce(RevealFlags::default(), RevealIntent::Start);
        let new = RevealReducer::reduce(state, RevealIntent::FormDelayElapsed);
        assert!(new.title_visible);
        assert!(new.form_visible);
    }

    #[test]
    fn withdrawing_reply_keeps_title_and_form() {
        let state = RevealFlags {
            title_visible: true,
            form_visible: true,
            reply_visible: true,
        };
        let new = RevealReducer::reduce(state, RevealIntent::ReplyWithdrawn);
        assert!(new.title_visible);
        assert!(new.form_visible);
        assert!(!new.reply_visible);
    }

    #[test]
    fn reply_can_rearm() {
        let state = RevealReducer::reduce(RevealFlags::default(), RevealIntent::ReplyAvailable);
        let state = RevealReducer::reduce(state, RevealIntent::ReplyWithdrawn);
        let state = RevealReducer::reduce(state, RevealIntent::ReplyAvailable);
        assert!(state.reply_visible);
    }
}
