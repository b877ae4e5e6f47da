pub mod anthropic;
pub mod canned;

use a11y_audit::config::{GeneratorConfig, GeneratorProvider};
use a11y_audit::generator::{GenerateError, TextGenerator};
use a11y_audit::requirements::RequirementSynthesizer;
use tracing::warn;

pub use anthropic::AnthropicGenerator;
pub use canned::CannedGenerator;

/// Names of the selectable providers, in config spelling.
pub const PROVIDERS: [&str; 3] = ["offline", "anthropic", "canned"];

/// Construct the generator selected by config. `Ok(None)` means offline.
pub fn generator_from_config(
    config: &GeneratorConfig,
) -> Result<Option<Box<dyn TextGenerator>>, GenerateError> {
    match config.provider {
        GeneratorProvider::Offline => Ok(None),
        GeneratorProvider::Anthropic => {
            Ok(Some(Box::new(AnthropicGenerator::from_config(config)?)))
        }
        GeneratorProvider::Canned => {
            let path = config
                .response_file
                .as_ref()
                .ok_or_else(|| GenerateError::Unavailable {
                    reason: "canned provider needs generator.response_file".to_string(),
                })?;
            let response =
                std::fs::read_to_string(path).map_err(|e| GenerateError::Unavailable {
                    reason: format!("failed to read {}: {e}", path.display()),
                })?;
            Ok(Some(Box::new(CannedGenerator::new(response))))
        }
    }
}

/// Requirement synthesizer for the configured provider. A provider that cannot
/// be constructed degrades to rule-based requirements.
pub fn synthesizer_from_config(config: &GeneratorConfig) -> RequirementSynthesizer {
    match generator_from_config(config) {
        Ok(Some(generator)) => RequirementSynthesizer::with_generator(generator),
        Ok(None) => RequirementSynthesizer::offline(),
        Err(e) => {
            warn!(error = %e, "text generator unavailable, using rule-based requirements");
            RequirementSynthesizer::offline()
        }
    }
}
