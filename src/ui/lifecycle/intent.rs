//! Intents for the request lifecycle.

use crate::generation::GenerationResult;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the lifecycle reducer.
#[derive(Debug, Clone)]
pub enum LifecycleIntent {
    /// A submission passed the guard and a generation call is being issued.
    Submit {
        /// Identifies the call so a stale result can be told apart.
        ticket: u64,
    },

    /// The generation call for `ticket` finished.
    Resolved {
        ticket: u64,
        result: GenerationResult,
    },
}

impl Intent for LifecycleIntent {}
