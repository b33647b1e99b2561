//! Model-View-Intent (MVI) primitives shared by the session state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data the renderer reads
//! - **Intent**: user action, timer expiry or a resolved generation call
//! - **Reducer**: pure `(State, Intent) -> State`; side effects are emitted by
//!   the `App` around the dispatch, never inside it

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
