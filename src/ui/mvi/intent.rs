//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a user action (submit, copy), a timer firing, or
/// the result of the generation call coming back.
pub trait Intent: Send + 'static {}
