use std::time::Duration;

/// Failure of a text-generation backend. Never escapes requirement synthesis:
/// every variant triggers the rule-based fallback.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("generator unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

/// Pluggable text-generation backend used to phrase requirement text.
/// Implementations make at most one attempt per call.
pub trait TextGenerator: Send + Sync {
    /// Short identifier (e.g., "anthropic", "offline")
    fn name(&self) -> &str;

    /// Complete `prompt`, returning the raw response text
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
