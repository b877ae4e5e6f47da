use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Severity, WcagLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub total: usize,
    pub critical: usize,
    /// `max(0, 100 - total * penalty)`
    pub score: u32,
}

impl ComplianceScore {
    pub fn for_level(issues: &[Issue], level: WcagLevel) -> Self {
        let at_level = issues.iter().filter(|i| i.wcag_level == level);
        let total = at_level.clone().count();
        let critical = at_level
            .filter(|i| i.severity == Severity::Critical)
            .count();
        Self {
            total,
            critical,
            score: level_score(total, level),
        }
    }
}

/// Score for `total` issues at `level`, clamped at zero.
pub fn level_score(total: usize, level: WcagLevel) -> u32 {
    let penalty = (total as u64).saturating_mul(level.penalty() as u64);
    100u64.saturating_sub(penalty) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagCompliance {
    #[serde(rename = "levelA")]
    pub level_a: ComplianceScore,
    #[serde(rename = "levelAA")]
    pub level_aa: ComplianceScore,
    #[serde(rename = "levelAAA")]
    pub level_aaa: ComplianceScore,
}

impl WcagCompliance {
    pub fn assess(issues: &[Issue]) -> Self {
        Self {
            level_a: ComplianceScore::for_level(issues, WcagLevel::A),
            level_aa: ComplianceScore::for_level(issues, WcagLevel::AA),
            level_aaa: ComplianceScore::for_level(issues, WcagLevel::AAA),
        }
    }

    pub fn level(&self, level: WcagLevel) -> &ComplianceScore {
        match level {
            WcagLevel::A => &self.level_a,
            WcagLevel::AA => &self.level_aa,
            WcagLevel::AAA => &self.level_aaa,
        }
    }

    /// Mean of the A and AA scores, rounded half up.
    pub fn overall_score(&self) -> u32 {
        (self.level_a.score + self.level_aa.score + 1) / 2
    }

    /// Issues that block WCAG 2.1 AA conformance (levels A and AA).
    pub fn aa_blocking_total(&self) -> usize {
        self.level_a.total + self.level_aa.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{FindingKind, RawFinding};
    use crate::issue::normalize_finding;

    fn issue(impact: &str, tag: &str) -> Issue {
        let finding = RawFinding {
            id: "rule".to_string(),
            impact: Some(impact.to_string()),
            tags: vec![tag.to_string()],
            ..Default::default()
        };
        normalize_finding(&finding, FindingKind::Violation)
    }

    #[test]
    fn test_empty_scores_are_perfect() {
        let compliance = WcagCompliance::assess(&[]);
        for level in WcagLevel::ALL {
            assert_eq!(compliance.level(level).total, 0);
            assert_eq!(compliance.level(level).score, 100);
        }
        assert_eq!(compliance.overall_score(), 100);
    }

    #[test]
    fn test_partition_by_level() {
        let issues = vec![
            issue("critical", "wcag2a"),
            issue("minor", "wcag2a"),
            issue("serious", "wcag2aa"),
            issue("moderate", "wcag2aaa"),
        ];
        let compliance = WcagCompliance::assess(&issues);
        assert_eq!(compliance.level_a.total, 2);
        assert_eq!(compliance.level_a.critical, 1);
        assert_eq!(compliance.level_a.score, 70);
        assert_eq!(compliance.level_aa.total, 1);
        assert_eq!(compliance.level_aa.critical, 1);
        assert_eq!(compliance.level_aa.score, 88);
        assert_eq!(compliance.level_aaa.total, 1);
        assert_eq!(compliance.level_aaa.critical, 0);
        assert_eq!(compliance.level_aaa.score, 90);
        assert_eq!(compliance.aa_blocking_total(), 3);
        assert_eq!(compliance.overall_score(), 79);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        assert_eq!(level_score(7, WcagLevel::A), 0);
        assert_eq!(level_score(6, WcagLevel::A), 10);
        assert_eq!(level_score(9, WcagLevel::AA), 0);
        assert_eq!(level_score(10, WcagLevel::AAA), 0);
        assert_eq!(level_score(usize::MAX, WcagLevel::AAA), 0);
    }

    #[test]
    fn test_overall_score_rounds_half_up() {
        // A: 85, AA: 100 → 92.5 → 93
        let issues = vec![issue("minor", "wcag2a")];
        assert_eq!(WcagCompliance::assess(&issues).overall_score(), 93);
    }
}
