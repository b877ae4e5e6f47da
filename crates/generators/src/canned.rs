use a11y_audit::generator::{GenerateError, TextGenerator};

/// Deterministic generator that answers every prompt with the same text.
/// Lets the generative path run offline and in tests.
pub struct CannedGenerator {
    response: String,
}

impl CannedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl TextGenerator for CannedGenerator {
    fn name(&self) -> &str {
        "canned"
    }

    fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        if self.response.is_empty() {
            return Err(GenerateError::Unavailable {
                reason: "no canned response".to_string(),
            });
        }
        Ok(self.response.clone())
    }
}
