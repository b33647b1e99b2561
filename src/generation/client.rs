//! HTTP client for the reply generation service.
//!
//! One POST per call, JSON body `{"emailContent", "tone"}`, reply read back
//! as text. No retries and no caching.

use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::EndpointConfig;

use super::error::GenerationError;
use super::types::{GenerationRequest, GenerationResult, GENERATION_FAILED_MESSAGE};

/// Object fields checked, in order, when the service answers with JSON.
const REPLY_FIELDS: &[&str] = &["reply", "text", "content", "message"];

/// Client for the remote generation endpoint.
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

impl GenerationClient {
    /// Build a client from endpoint config.
    pub fn new(config: &EndpointConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(GenerationError::Build)?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
        })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the request and classify the outcome.
    ///
    /// Every failure is reported as [`GENERATION_FAILED_MESSAGE`]; the cause
    /// is logged here and nowhere else.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        match self.send(request).await {
            Ok(reply) => GenerationResult::Success(reply),
            Err(err) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    error = %err,
                    "Reply generation failed"
                );
                GenerationResult::Failure(GENERATION_FAILED_MESSAGE.to_string())
            }
        }
    }

    async fn send(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            content_len = request.content.len(),
            tone = request.tone.wire_name(),
            "Sending generation request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request.to_wire())
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(GenerationError::Body)?;
        let reply = extract_reply(&body);

        tracing::info!(
            status = %status,
            latency_ms,
            reply_len = reply.len(),
            "Reply generated"
        );

        Ok(reply)
    }
}

/// Turn a success body into display text.
///
/// A JSON string is unquoted, a JSON object yields its first string field
/// from [`REPLY_FIELDS`], anything else is used verbatim.
fn extract_reply(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(Value::Object(map)) => REPLY_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_str))
            .map(String::from)
            .unwrap_or_else(|| body.to_string()),
        _ => body.to_string(),
    }
}
