use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw result of one GET against the graph endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub status: u16,
    pub body: String,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decoded graph markup ready to be spliced into the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMarkup {
    pub html: String,
    pub fetched_at: DateTime<Utc>,
}

impl GraphMarkup {
    pub fn new(html: String) -> Self {
        Self {
            html,
            fetched_at: Utc::now(),
        }
    }
}

/// Why a fetched response did not produce a container update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    NonSuccessStatus(u16),
    MalformedBody(String),
    UnexpectedShape(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonSuccessStatus(status) => {
                write!(f, "endpoint returned non-success status {}", status)
            }
            Self::MalformedBody(detail) => {
                write!(f, "response body is not valid JSON: {}", detail)
            }
            Self::UnexpectedShape(shape) => {
                write!(f, "expected a JSON string payload, got {}", shape)
            }
        }
    }
}

/// Result of the decode stage: markup to render, or a reason to leave the
/// container untouched.
#[derive(Debug, Clone)]
pub enum DecodeOutcome {
    Markup(GraphMarkup),
    Skipped(SkipReason),
}

/// What one engine run did to the container.
#[derive(Debug, Clone)]
pub enum RefreshReport {
    Updated { target: String },
    Unchanged { reason: SkipReason },
}

impl RefreshReport {
    pub fn updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}
