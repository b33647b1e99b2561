//! Terminal UI: the session state machines, the effect runner that executes
//! their side effects, and the ratatui front end.

pub mod app;
pub mod copy_ack;
pub mod effects;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod lifecycle;
pub mod mvi;
pub mod render;
pub mod reveal;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
