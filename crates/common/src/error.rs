//! Error types for the insights pipeline

use crate::messages;

/// Failures reported by a text generation provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Building the HTTP client failed
    Client(String),
    /// Transport-level failure (DNS, TLS, connection reset, timeout)
    Http(String),
    /// Provider answered with a non-success status
    Api { status: u16, body: String },
    /// Provider answered with a body we could not decode
    Parse(String),
    /// Provider answered without any text
    EmptyResponse,
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmError::Client(msg) => write!(f, "Client error: {}", msg),
            LlmError::Http(msg) => write!(f, "HTTP request failed: {}", msg),
            LlmError::Api { status, body } => write!(f, "API error: {} - {}", status, body),
            LlmError::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
            LlmError::EmptyResponse => write!(f, "No text in response"),
        }
    }
}

impl std::error::Error for LlmError {}

/// Reasons an insight could not be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightError {
    /// No text generation client is configured
    Disabled,
    /// Too few expense transactions to say anything useful
    InsufficientData { expenses: usize },
    /// Summing the expenses exceeded the decimal range
    AmountOverflow,
    /// The text generation call failed
    Upstream(LlmError),
}

impl InsightError {
    /// Localized message shown to the user in place of an insight
    pub fn fallback_message(&self) -> &'static str {
        match self {
            InsightError::Disabled => messages::AI_UNAVAILABLE,
            InsightError::InsufficientData { .. } => messages::INSUFFICIENT_DATA,
            InsightError::AmountOverflow | InsightError::Upstream(_) => {
                messages::GENERATION_FAILED
            }
        }
    }
}

impl std::fmt::Display for InsightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightError::Disabled => write!(f, "Text generation is disabled"),
            InsightError::InsufficientData { expenses } => {
                write!(f, "Not enough expense data: {} transactions", expenses)
            }
            InsightError::AmountOverflow => write!(f, "Expense total exceeds the supported range"),
            InsightError::Upstream(e) => write!(f, "Text generation failed: {}", e),
        }
    }
}

impl std::error::Error for InsightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InsightError::Upstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LlmError> for InsightError {
    fn from(e: LlmError) -> Self {
        InsightError::Upstream(e)
    }
}
