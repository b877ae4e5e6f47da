use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AuditError, AuditResult};

/// Impact rating reported by the scanner.
/// Anything outside the four known ratings is kept as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Minor,
    Moderate,
    Serious,
    Critical,
    Unknown,
}

impl Impact {
    pub fn parse(raw: Option<&str>) -> Option<Impact> {
        raw.map(|s| match s {
            "minor" => Impact::Minor,
            "moderate" => Impact::Moderate,
            "serious" => Impact::Serious,
            "critical" => Impact::Critical,
            _ => Impact::Unknown,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Minor => "minor",
            Impact::Moderate => "moderate",
            Impact::Serious => "serious",
            Impact::Critical => "critical",
            Impact::Unknown => "unknown",
        }
    }
}

/// Whether a finding is a confirmed failure or an item the scanner could not
/// decide on and left for manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    Violation,
    NeedsReview,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
}

/// One affected DOM node of a finding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNode {
    /// Selector parts. Frames and shadow roots nest arrays here.
    #[serde(default)]
    pub target: Vec<Value>,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub any: Vec<CheckResult>,
    #[serde(default)]
    pub all: Vec<CheckResult>,
}

impl RawNode {
    /// Flattened selector parts, nested arrays included, in document order.
    pub fn target_parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        for value in &self.target {
            flatten_target(value, &mut parts);
        }
        parts
    }

    /// Selector parts joined by a single space.
    pub fn selector(&self) -> String {
        self.target_parts().join(" ")
    }

    /// First `any` message, else first `all` message, else empty.
    pub fn message(&self) -> String {
        self.any
            .first()
            .or_else(|| self.all.first())
            .map(|c| c.message.clone())
            .unwrap_or_default()
    }
}

fn flatten_target(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => {
            for item in items {
                flatten_target(item, out);
            }
        }
        Value::Null => {}
        other => out.push(other.to_string()),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFinding {
    pub id: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScanResult {
    #[serde(default)]
    pub violations: Vec<RawFinding>,
    #[serde(default)]
    pub incomplete: Vec<RawFinding>,
}

impl RawScanResult {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty() && self.incomplete.is_empty()
    }

    /// Every finding paired with its kind: violations first, then incomplete.
    pub fn findings(&self) -> impl Iterator<Item = (&RawFinding, FindingKind)> {
        self.violations
            .iter()
            .map(|f| (f, FindingKind::Violation))
            .chain(self.incomplete.iter().map(|f| (f, FindingKind::NeedsReview)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub title: String,
    pub url: String,
    pub description: String,
    pub viewport: String,
}

/// Response of the page scanner: page metadata plus the raw scan result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPayload {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub results: RawScanResult,
}

fn default_success() -> bool {
    true
}

impl ScanPayload {
    pub fn from_json(json: &str) -> AuditResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a scanner response saved to disk.
    pub fn load(path: &Path) -> AuditResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AuditError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}
