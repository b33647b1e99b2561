//! Transient "copied" acknowledgement.
//!
//! Set on a successful clipboard write, cleared 2 s later. A newer copy
//! restarts the window: each copy bumps an epoch and only the expiry carrying
//! the current epoch clears the flag.

mod intent;
mod reducer;
mod state;

pub use intent::CopyAckIntent;
pub use reducer::CopyAckReducer;
pub use state::{CopyAckState, COPY_ACK_WINDOW};
