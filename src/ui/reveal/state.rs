//! Visibility flags for the staged reveal.

use std::time::Duration;

use crate::ui::mvi::UiState;

/// Delay between session start and the form appearing.
pub const FORM_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Which sections are currently shown.
///
/// `title_visible` and `form_visible` only ever go false → true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealFlags {
    pub title_visible: bool,
    pub form_visible: bool,
    pub reply_visible: bool,
}

impl UiState for RevealFlags {}
