use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{AuditError, AuditResult};
use crate::finding::{RawFinding, RawScanResult};

/// Project-level configuration loaded from `.a11y-audit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    pub generator: GeneratorConfig,
    pub rules: HashMap<String, RuleConfig>,
    pub suppressions: SuppressionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub output_format: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorProvider {
    #[default]
    Offline,
    Anthropic,
    /// Replays a fixed response from `response_file`.
    Canned,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub provider: GeneratorProvider,
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub response_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: GeneratorProvider::Offline,
            endpoint: "https://api.anthropic.com".to_string(),
            model: "claude-3-5-sonnet-latest".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            timeout_secs: 30,
            max_tokens: 4000,
            response_file: None,
        }
    }
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key from the configured environment variable, if set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuppressionConfig {
    /// Glob patterns matched against scanner rule ids.
    pub rules: Vec<String>,
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> AuditResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| AuditError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AuditError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check if a scanner rule is enabled according to config.
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules
            .get(rule_id)
            .and_then(|r| r.enabled)
            .unwrap_or(true)
    }

    /// Check if a rule id matches one of the suppression glob patterns.
    pub fn is_rule_suppressed(&self, rule_id: &str) -> bool {
        self.suppressions
            .rules
            .iter()
            .any(|pattern| glob::Pattern::new(pattern).is_ok_and(|p| p.matches(rule_id)))
    }

    fn keeps(&self, finding: &RawFinding) -> bool {
        let keep = self.is_rule_enabled(&finding.id) && !self.is_rule_suppressed(&finding.id);
        if !keep {
            debug!(finding = %finding, "dropped by config");
        }
        keep
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# a11y-audit configuration

[global]
# Output format: "text", "json", "sarif"
output_format = "text"

[generator]
# "offline" uses rule-based requirements only; "anthropic" asks a language
# model to phrase them and falls back to the rules on any failure; "canned"
# replays the response stored in response_file.
provider = "offline"
endpoint = "https://api.anthropic.com"
model = "claude-3-5-sonnet-latest"
api_key_env = "ANTHROPIC_API_KEY"
timeout_secs = 30
max_tokens = 4000
# response_file = "requirements-response.json"

# Per-rule overrides
# [rules.color-contrast]
# enabled = false

[suppressions]
# Glob patterns for scanner rule ids to drop before analysis
rules = []
"#
    }
}

/// Drop findings whose rule is disabled or suppressed by config.
pub fn apply_suppressions(scan: RawScanResult, config: &Config) -> RawScanResult {
    RawScanResult {
        violations: scan
            .violations
            .into_iter()
            .filter(|f| config.keeps(f))
            .collect(),
        incomplete: scan
            .incomplete
            .into_iter()
            .filter(|f| config.keeps(f))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(id: &str) -> RawFinding {
        RawFinding {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.global.output_format, "text");
        assert_eq!(config.generator.provider, GeneratorProvider::Offline);
        assert_eq!(config.generator.timeout(), Duration::from_secs(30));
        assert!(config.is_rule_enabled("any-rule"));
        assert!(!config.is_rule_suppressed("any-rule"));
    }

    #[test]
    fn test_default_toml_parses_to_defaults() {
        let config: Config = toml::from_str(Config::default_toml()).unwrap();
        assert_eq!(config.generator.provider, GeneratorProvider::Offline);
        assert_eq!(config.generator.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.generator.max_tokens, 4000);
        assert!(config.suppressions.rules.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[generator]
provider = "anthropic"
timeout_secs = 5

[rules.color-contrast]
enabled = false

[suppressions]
rules = ["landmark-*"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.generator.provider, GeneratorProvider::Anthropic);
        assert_eq!(config.generator.timeout(), Duration::from_secs(5));
        assert_eq!(config.generator.model, "claude-3-5-sonnet-latest");
        assert!(!config.is_rule_enabled("color-contrast"));
        assert!(config.is_rule_enabled("image-alt"));
        assert!(config.is_rule_suppressed("landmark-one-main"));
        assert!(!config.is_rule_suppressed("region"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(Path::new("/nonexistent/.a11y-audit.toml")).unwrap();
        assert_eq!(config.global.output_format, "text");
    }

    #[test]
    fn test_apply_suppressions() {
        let toml = r#"
[rules.region]
enabled = false

[suppressions]
rules = ["landmark-*"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let scan = RawScanResult {
            violations: vec![finding("region"), finding("image-alt"), finding("landmark-unique")],
            incomplete: vec![finding("color-contrast"), finding("landmark-one-main")],
        };

        let filtered = apply_suppressions(scan, &config);
        let ids = |v: &[RawFinding]| v.iter().map(|f| f.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&filtered.violations), vec!["image-alt"]);
        assert_eq!(ids(&filtered.incomplete), vec!["color-contrast"]);
    }
}
