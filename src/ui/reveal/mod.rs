//! Staged reveal of the screen sections.
//!
//! The title shows at session start, the form 500 ms later, and the reply
//! panel whenever a reply is current.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Visibility flags
//! - `intent.rs` - Timer and lifecycle events
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::RevealIntent;
pub use reducer::RevealReducer;
pub use state::{RevealFlags, FORM_REVEAL_DELAY};
