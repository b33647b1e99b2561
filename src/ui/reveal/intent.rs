//! Intents for the reveal sequence.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealIntent {
    /// Session initialised.
    Start,

    /// The form delay timer fired.
    FormDelayElapsed,

    /// A reply became current.
    ReplyAvailable,

    /// The reply stopped being current (new submission or failure).
    ReplyWithdrawn,
}

impl Intent for RevealIntent {}
