use serde::{Deserialize, Serialize};

use crate::finding::{FindingKind, Impact};

/// WCAG conformance level, least to most strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl WcagLevel {
    /// Every level, least strict first.
    pub const ALL: [WcagLevel; 3] = [WcagLevel::A, WcagLevel::AA, WcagLevel::AAA];

    /// Points deducted from the level score for each issue at that level.
    pub fn penalty(&self) -> u32 {
        match self {
            WcagLevel::A => 15,
            WcagLevel::AA => 12,
            WcagLevel::AAA => 10,
        }
    }
}

/// Issue severity. Derived Ord puts Critical < Warning < Info, so sorting
/// ascending lists the most severe issues first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    /// Story-point weight used for the aggregate effort estimate.
    pub fn weight(&self) -> u32 {
        match self {
            Effort::Low => 1,
            Effort::Medium => 3,
            Effort::High => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "1 day")]
    OneDay,
    #[serde(rename = "2-3 days")]
    FewDays,
    #[serde(rename = "1 week")]
    OneWeek,
    #[serde(rename = "1-2 weeks")]
    TwoWeeks,
}

impl Timeline {
    pub fn label(&self) -> &'static str {
        match self {
            Timeline::OneDay => "1 day",
            Timeline::FewDays => "2-3 days",
            Timeline::OneWeek => "1 week",
            Timeline::TwoWeeks => "1-2 weeks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueNode {
    pub target: Vec<String>,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    pub message: String,
}

/// A normalized accessibility issue, derived from exactly one raw finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: FindingKind,
    pub wcag_level: WcagLevel,
    pub severity: Severity,
    pub priority: Priority,
    pub impact: Impact,
    /// Impact string as the scanner reported it, `moderate` when absent.
    #[serde(default)]
    pub reported_impact: String,
    pub recommendation: String,
    pub elements: Vec<String>,
    pub effort: Effort,
    pub timeline: Timeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(default)]
    pub nodes: Vec<IssueNode>,
}

impl Issue {
    pub fn is_violation(&self) -> bool {
        self.kind == FindingKind::Violation
    }
}
