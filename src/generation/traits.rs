//! Seam between the session runtime and the generation backend.

use async_trait::async_trait;

use super::client::GenerationClient;
use super::types::{GenerationRequest, GenerationResult};

/// Anything that can turn a request into a reply.
///
/// The effect runner only sees this trait, so the session can be driven by
/// a stub in tests.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Resolve one request. Must issue at most one outbound call.
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult;
}

#[async_trait]
impl ReplyGenerator for GenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        GenerationClient::generate(self, request).await
    }
}
