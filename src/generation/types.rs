//! Request and result types for reply generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// User-facing reason shown for every failed generation.
///
/// Transport errors, timeouts and server errors all collapse into this one
/// message; the underlying cause only goes to the log.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate email reply. Please try again.";

/// Tone hint sent alongside the email content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tone {
    /// No preference.
    #[default]
    None,
    Professional,
    Casual,
    Friendly,
    Enthusiastic,
    Apologetic,
}

impl Tone {
    /// Selector order.
    pub const ALL: [Tone; 6] = [
        Tone::None,
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Enthusiastic,
        Tone::Apologetic,
    ];

    /// Value sent in the `tone` field. `None` is the empty string.
    pub fn wire_name(self) -> &'static str {
        match self {
            Tone::None => "",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Apologetic => "apologetic",
        }
    }

    /// Label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Tone::None => "None",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Apologetic => "Apologetic",
        }
    }

    /// Next tone in selector order, wrapping around.
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous tone in selector order, wrapping around.
    pub fn previous(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a tone name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tone '{0}' (expected one of: none, professional, casual, friendly, enthusiastic, apologetic)")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized == "none" {
            return Ok(Tone::None);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|tone| tone.wire_name() == normalized)
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

impl TryFrom<String> for Tone {
    type Error = UnknownTone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.wire_name().to_string()
    }
}

/// A single generation request, built fresh from the form on each submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub content: String,
    pub tone: Tone,
}

impl GenerationRequest {
    pub fn new(content: impl Into<String>, tone: Tone) -> Self {
        Self {
            content: content.into(),
            tone,
        }
    }

    /// Content must be non-empty for the request to be sent.
    pub fn is_submittable(&self) -> bool {
        !self.content.is_empty()
    }

    pub(crate) fn to_wire(&self) -> WireRequest<'_> {
        WireRequest {
            email_content: &self.content,
            tone: self.tone.wire_name(),
        }
    }
}

/// JSON body of the outbound call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest<'a> {
    email_content: &'a str,
    tone: &'a str,
}

/// Outcome of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success(String),
    Failure(String),
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
