//! Request lifecycle feature module.
//!
//! Tracks a single generation request from submission to its result:
//! Idle → Submitting → (Succeeded | Failed), with re-submission allowed from
//! either terminal state and no way back to Idle.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle state enum
//! - `intent.rs` - Submit / Resolved
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::LifecycleIntent;
pub use reducer::LifecycleReducer;
pub use state::LifecycleState;
