//! State for the request lifecycle.

use crate::ui::mvi::UiState;

/// Where the current generation request stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Nothing submitted yet. Only reachable at session start.
    #[default]
    Idle,

    /// A generation call is in flight.
    Submitting {
        /// Ticket of the outstanding call.
        ticket: u64,
    },

    /// The last call returned a reply.
    Succeeded { reply: String },

    /// The last call failed.
    Failed { reason: String },
}

impl UiState for LifecycleState {}

impl LifecycleState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Ticket of the in-flight call, if any.
    pub fn outstanding_ticket(&self) -> Option<u64> {
        match self {
            Self::Submitting { ticket } => Some(*ticket),
            _ => None,
        }
    }

    /// Current reply. Only present in `Succeeded`.
    pub fn reply(&self) -> Option<&str> {
        match self {
            Self::Succeeded { reply } => Some(reply),
            _ => None,
        }
    }

    /// Error shown to the user. Only present in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}
