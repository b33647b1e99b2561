//! Base trait for UI state.

/// Marker trait for state driven by a [`Reducer`](super::Reducer).
///
/// `Default` is the state at session start; `PartialEq` lets tests compare
/// whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
