use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::finding::PageInfo;
use crate::issue::{Issue, Severity};
use crate::requirements::{RequirementSet, RequirementSource};
use crate::scoring::WcagCompliance;
use crate::triage::TriagePlan;

const KEY_FINDINGS: [&str; 4] = [
    "Multiple critical accessibility barriers identified",
    "Color contrast issues affect readability",
    "Keyboard navigation needs improvement",
    "Screen reader compatibility requires attention",
];

const BUSINESS_IMPACT: [&str; 4] = [
    "Potential legal compliance risks",
    "Reduced user base accessibility",
    "Negative impact on user experience",
    "SEO implications",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Prioritize critical issues for immediate resolution",
    "Implement accessibility testing in development workflow",
    "Train team on WCAG guidelines",
    "Consider accessibility audit for existing products",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub overall_score: u32,
    pub critical_issues: usize,
    pub warning_issues: usize,
    pub total_issues: usize,
    pub key_findings: Vec<String>,
    pub business_impact: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ExecutiveSummary {
    pub fn summarize(issues: &[Issue], compliance: &WcagCompliance) -> Self {
        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        Self {
            overall_score: compliance.overall_score(),
            critical_issues: count(Severity::Critical),
            warning_issues: count(Severity::Warning),
            total_issues: issues.len(),
            key_findings: to_strings(&KEY_FINDINGS),
            business_impact: to_strings(&BUSINESS_IMPACT),
            recommendations: to_strings(&RECOMMENDATIONS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalConsiderations {
    pub language: Vec<String>,
    pub cultural: Vec<String>,
    pub situational: Vec<String>,
}

impl Default for CulturalConsiderations {
    fn default() -> Self {
        Self {
            language: to_strings(&[
                "Consider right-to-left language support",
                "Provide multiple language options",
                "Use culturally appropriate imagery",
                "Avoid text in images for translation purposes",
            ]),
            cultural: to_strings(&[
                "Color meanings vary across cultures",
                "Consider different reading patterns",
                "Respect cultural symbols and imagery",
                "Provide culturally relevant examples",
            ]),
            situational: to_strings(&[
                "Design for various lighting conditions",
                "Consider mobile-first approach for developing regions",
                "Account for limited bandwidth scenarios",
                "Support for older assistive technologies",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Complete audit of one page. Built once by the assembler and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub url: String,
    pub page_info: PageInfo,
    pub timestamp: DateTime<Utc>,
    pub executive_summary: ExecutiveSummary,
    pub wcag_compliance: WcagCompliance,
    pub issues: Vec<Issue>,
    pub triage_plan: TriagePlan,
    pub cultural_considerations: CulturalConsiderations,
    pub prd_requirements: RequirementSet,
    pub requirements_source: RequirementSource,
}
