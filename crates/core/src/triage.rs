use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Priority, Severity};

/// Issue counts by the unit of their timeline label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    pub week1: usize,
    pub week2: usize,
    pub month1: usize,
}

impl TimelineSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let count = |unit: &str| {
            issues
                .iter()
                .filter(|i| i.timeline.label().contains(unit))
                .count()
        };
        Self {
            week1: count("day"),
            week2: count("week"),
            month1: count("month"),
        }
    }
}

/// Remediation tiers.
///
/// Critical issues with low priority and every info-level issue fall into no
/// tier. The effort estimate still covers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriagePlan {
    pub immediate: Vec<Issue>,
    pub short_term: Vec<Issue>,
    pub long_term: Vec<Issue>,
    pub estimated_effort: u32,
    pub timeline: TimelineSummary,
}

impl TriagePlan {
    pub fn plan(issues: &[Issue]) -> Self {
        let select = |severity: Severity, priorities: &[Priority]| -> Vec<Issue> {
            issues
                .iter()
                .filter(|i| i.severity == severity && priorities.contains(&i.priority))
                .cloned()
                .collect()
        };

        let immediate = select(Severity::Critical, &[Priority::High]);
        let mut short_term = select(Severity::Critical, &[Priority::Medium]);
        short_term.extend(select(Severity::Warning, &[Priority::High]));
        let long_term = select(Severity::Warning, &[Priority::Medium, Priority::Low]);

        Self {
            immediate,
            short_term,
            long_term,
            estimated_effort: total_effort(issues),
            timeline: TimelineSummary::from_issues(issues),
        }
    }

    pub fn tiered_count(&self) -> usize {
        self.immediate.len() + self.short_term.len() + self.long_term.len()
    }
}

/// Sum of effort weights over all issues.
pub fn total_effort(issues: &[Issue]) -> u32 {
    issues.iter().map(|i| i.effort.weight()).sum()
}
