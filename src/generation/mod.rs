//! Reply generation: request types, the HTTP client and its error type.

mod client;
mod error;
mod traits;
mod types;

pub use client::GenerationClient;
pub use error::GenerationError;
pub use traits::ReplyGenerator;
pub use types::{
    GenerationRequest, GenerationResult, Tone, UnknownTone, GENERATION_FAILED_MESSAGE,
};
