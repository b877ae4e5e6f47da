use reqwest::Url;

use crate::error::{AuditError, AuditResult};

/// Accepts absolute `http` / `https` URLs with a host.
pub fn validate_url(url: &str) -> AuditResult<()> {
    let invalid = |reason: String| AuditError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    if url.trim().is_empty() {
        return Err(invalid("URL is required".to_string()));
    }
    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".to_string()));
    }
    if parsed.host().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(())
}
