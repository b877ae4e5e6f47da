use std::path::PathBuf;

/// Errors visible to callers of the core. Generator failures are absorbed by
/// the requirement synthesizer and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("page scan failed: {reason}")]
    ScanFailed { reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type AuditResult<T> = Result<T, AuditError>;
