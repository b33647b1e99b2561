//! Intents for the copy acknowledgement.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAckIntent {
    /// Clipboard write succeeded.
    Copied,

    /// Acknowledgement window scheduled by copy `epoch` elapsed.
    Expired { epoch: u64 },
}

impl Intent for CopyAckIntent {}
