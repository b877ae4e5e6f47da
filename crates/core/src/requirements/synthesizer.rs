use tracing::{debug, warn};

use super::fallback::fallback_requirements;
use super::generative::{build_prompt, parse_response, AuditSummary};
use super::types::{RequirementSet, RequirementSource};
use crate::generator::TextGenerator;
use crate::issue::Issue;
use crate::scoring::WcagCompliance;

/// Produces PRD requirements, through a text generator when one is configured
/// and through the rule-based fallback otherwise or when generation fails.
#[derive(Default)]
pub struct RequirementSynthesizer {
    generator: Option<Box<dyn TextGenerator>>,
}

impl RequirementSynthesizer {
    /// Fallback-only synthesizer.
    pub fn offline() -> Self {
        Self { generator: None }
    }

    pub fn with_generator(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn generator_name(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.name())
    }

    pub fn synthesize(
        &self,
        issues: &[Issue],
        compliance: &WcagCompliance,
        url: &str,
    ) -> (RequirementSet, RequirementSource) {
        let Some(generator) = self.generator.as_deref() else {
            debug!("no text generator configured, using rule-based requirements");
            return (
                fallback_requirements(issues, compliance),
                RequirementSource::Fallback,
            );
        };

        let prompt = build_prompt(&AuditSummary::new(issues, compliance, url));
        let outcome = generator
            .generate(&prompt)
            .map_err(|e| e.to_string())
            .and_then(|text| parse_response(&text).map_err(|e| e.to_string()));

        match outcome {
            Ok(set) => {
                debug!(
                    generator = generator.name(),
                    requirements = set.len(),
                    "generated requirements"
                );
                (set, RequirementSource::Generated)
            }
            Err(error) => {
                warn!(
                    generator = generator.name(),
                    error = %error,
                    "requirement generation failed, using rule-based requirements"
                );
                (
                    fallback_requirements(issues, compliance),
                    RequirementSource::Fallback,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GenerateError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockGenerator {
        response: Result<&'static str, ()>,
        calls: Arc<AtomicUsize>,
    }

    impl TextGenerator for MockGenerator {
        fn name(&self) -> &str {
            "mock"
        }
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .map(str::to_string)
                .map_err(|_| GenerateError::Transport {
                    reason: "connection refused".to_string(),
                })
        }
    }

    fn synth(response: Result<&'static str, ()>) -> (RequirementSynthesizer, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = MockGenerator {
            response,
            calls: calls.clone(),
        };
        (RequirementSynthesizer::with_generator(Box::new(generator)), calls)
    }

    #[test]
    fn test_offline_uses_fallback() {
        let synthesizer = RequirementSynthesizer::offline();
        let (set, source) = synthesizer.synthesize(&[], &WcagCompliance::assess(&[]), "https://a.test");
        assert_eq!(source, RequirementSource::Fallback);
        assert_eq!(set.compliance.len(), 1);
        assert!(synthesizer.generator_name().is_none());
    }

    #[test]
    fn test_generated_response_is_used() {
        let (synthesizer, calls) = synth(Ok(
            r#"Sure! {"functional": [], "technical": [], "testing": [], "compliance": [
                {"requirement": "r", "benefit": "b", "userImpact": "u", "implementation": "i",
                 "priority": "Low", "affectedElements": 0}]}"#,
        ));
        let (set, source) = synthesizer.synthesize(&[], &WcagCompliance::assess(&[]), "https://a.test");
        assert_eq!(source, RequirementSource::Generated);
        assert_eq!(set.compliance[0].requirement, "r");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_generator_error_falls_back_after_one_attempt() {
        let (synthesizer, calls) = synth(Err(()));
        let (set, source) = synthesizer.synthesize(&[], &WcagCompliance::assess(&[]), "https://a.test");
        assert_eq!(source, RequirementSource::Fallback);
        assert_eq!(set, fallback_requirements(&[], &WcagCompliance::assess(&[])));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unparseable_response_falls_back() {
        let (synthesizer, _) = synth(Ok("I'm unable to produce JSON today."));
        let (_, source) = synthesizer.synthesize(&[], &WcagCompliance::assess(&[]), "https://a.test");
        assert_eq!(source, RequirementSource::Fallback);

        let (synthesizer, _) = synth(Ok(r#"{"functional": []}"#));
        let (_, source) = synthesizer.synthesize(&[], &WcagCompliance::assess(&[]), "https://a.test");
        assert_eq!(source, RequirementSource::Fallback);
    }
}
