use std::collections::BTreeMap;

use serde::Serialize;

use super::categories::group_by_category;
use super::types::RequirementSet;
use crate::issue::{Issue, Priority, Severity, WcagLevel};
use crate::scoring::WcagCompliance;

const TOP_ISSUES: usize = 10;
const ELEMENTS_PER_ISSUE: usize = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDigest {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub priority: Priority,
    pub wcag_level: WcagLevel,
    pub impact: String,
    pub element_count: usize,
    pub elements: Vec<String>,
}

/// Condensed view of an audit sent to the text generator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub url: String,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub category_counts: BTreeMap<&'static str, usize>,
    pub wcag_compliance: WcagCompliance,
    pub top_issues: Vec<IssueDigest>,
}

impl AuditSummary {
    pub fn new(issues: &[Issue], compliance: &WcagCompliance, url: &str) -> Self {
        let category_counts = group_by_category(issues)
            .into_iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(category, members)| (category.label, members.len()))
            .collect();

        let top_issues = issues
            .iter()
            .take(TOP_ISSUES)
            .map(|i| IssueDigest {
                id: i.id.clone(),
                title: i.title.clone(),
                severity: i.severity,
                priority: i.priority,
                wcag_level: i.wcag_level,
                impact: i.impact.as_str().to_string(),
                element_count: i.elements.len(),
                elements: i.elements.iter().take(ELEMENTS_PER_ISSUE).cloned().collect(),
            })
            .collect();

        Self {
            url: url.to_string(),
            total_issues: issues.len(),
            critical_issues: issues
                .iter()
                .filter(|i| i.severity == Severity::Critical)
                .count(),
            category_counts,
            wcag_compliance: *compliance,
            top_issues,
        }
    }
}

const INSTRUCTIONS: &str = r#"You are an accessibility consultant writing the requirements section of a product requirements document (PRD).
Based on the accessibility audit summary below, write concrete, user-centred requirements grouped into four buckets.

Respond with a single JSON object and nothing else, using exactly this shape:
{
  "functional": [Requirement],
  "technical": [Requirement],
  "testing": [Requirement],
  "compliance": [Requirement]
}
where each Requirement is:
{
  "requirement": "what must be built or changed",
  "benefit": "why this matters",
  "userImpact": "who benefits and how",
  "implementation": "how to implement it, naming affected elements where useful",
  "priority": "Critical" | "High" | "Medium" | "Low",
  "affectedElements": <integer>
}"#;

/// Prompt asking the generator for the four requirement buckets.
pub fn build_prompt(summary: &AuditSummary) -> String {
    let body = serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string());
    format!("{INSTRUCTIONS}\n\nAudit summary:\n{body}\n")
}

/// Balanced `{...}` span opening at byte `start`, or `None` if it never
/// closes. Braces inside JSON strings are ignored.
fn balanced_object_at(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Every balanced `{...}` candidate in `text`, by opening position. Openings
/// that never close are skipped.
pub fn json_objects(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices('{')
        .filter_map(move |(start, _)| balanced_object_at(text, start))
}

/// First balanced `{...}` in `text`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    json_objects(text).next()
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("no JSON object in response")]
    NoJson,
    #[error("response JSON does not match the requirement schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// First JSON object in `text` that fits the requirement schema. Prose around
/// it, including stray braces, is skipped.
pub fn parse_response(text: &str) -> Result<RequirementSet, ResponseError> {
    let mut last_error = None;
    for candidate in json_objects(text) {
        match serde_json::from_str(candidate) {
            Ok(set) => return Ok(set),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.map_or(ResponseError::NoJson, ResponseError::Schema))
}
