//! State for the copy acknowledgement.

use std::time::Duration;

use crate::ui::mvi::UiState;

/// How long the acknowledgement stays up after a copy.
pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyAckState {
    copied: bool,
    epoch: u64,
}

impl UiState for CopyAckState {}

impl CopyAckState {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Epoch of the latest copy. Expiries for older epochs are ignored.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(super) fn copied(epoch: u64) -> Self {
        Self {
            copied: true,
            epoch,
        }
    }

    pub(super) fn cleared(self) -> Self {
        Self {
            copied: false,
            ..self
        }
    }
}
