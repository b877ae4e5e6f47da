use crate::finding::{FindingKind, Impact, RawFinding, RawScanResult};

use super::types::{Effort, Issue, IssueNode, Priority, Severity, Timeline, WcagLevel};

/// Tag → level pairs, checked in order. The first tag present wins.
const WCAG_TAGS: [(&str, WcagLevel); 6] = [
    ("wcag2a", WcagLevel::A),
    ("wcag2aa", WcagLevel::AA),
    ("wcag2aaa", WcagLevel::AAA),
    ("wcag21a", WcagLevel::A),
    ("wcag21aa", WcagLevel::AA),
    ("wcag21aaa", WcagLevel::AAA),
];

const MAX_EFFORT_NODES: usize = 5;
const MAX_TIMELINE_NODES: usize = 10;

/// Normalize every finding of a scan: violations first, then incomplete items.
pub fn normalize_scan(scan: &RawScanResult) -> Vec<Issue> {
    scan.findings()
        .map(|(finding, kind)| normalize_finding(finding, kind))
        .collect()
}

/// Map one raw scanner finding into an `Issue`. Never fails: a missing impact
/// counts as `moderate` and missing tags give level AA.
pub fn normalize_finding(finding: &RawFinding, kind: FindingKind) -> Issue {
    let impact = Impact::parse(finding.impact.as_deref()).unwrap_or(Impact::Moderate);
    let node_count = finding.nodes.len();

    Issue {
        id: finding.id.clone(),
        title: finding.help.clone(),
        description: finding.description.clone(),
        kind,
        wcag_level: wcag_level(&finding.tags),
        severity: severity(impact, kind),
        priority: priority(impact, kind),
        impact,
        reported_impact: finding
            .impact
            .clone()
            .unwrap_or_else(|| Impact::Moderate.as_str().to_string()),
        recommendation: finding.help.clone(),
        elements: finding.nodes.iter().map(|n| n.selector()).collect(),
        effort: estimate_effort(node_count, impact),
        timeline: estimate_timeline(node_count, impact),
        help_url: finding.help_url.clone(),
        nodes: finding
            .nodes
            .iter()
            .map(|n| IssueNode {
                target: n.target_parts(),
                html: n.html.clone(),
                impact: n.impact.clone(),
                message: n.message(),
            })
            .collect(),
    }
}

pub fn wcag_level(tags: &[String]) -> WcagLevel {
    WCAG_TAGS
        .iter()
        .find(|(tag, _)| tags.iter().any(|t| t == tag))
        .map(|(_, level)| *level)
        .unwrap_or(WcagLevel::AA)
}

pub fn severity(impact: Impact, kind: FindingKind) -> Severity {
    if kind == FindingKind::NeedsReview {
        return Severity::Warning;
    }
    match impact {
        Impact::Critical | Impact::Serious => Severity::Critical,
        Impact::Moderate => Severity::Warning,
        Impact::Minor => Severity::Info,
        Impact::Unknown => Severity::Warning,
    }
}

pub fn priority(impact: Impact, kind: FindingKind) -> Priority {
    if kind == FindingKind::NeedsReview {
        return Priority::Medium;
    }
    match impact {
        Impact::Critical | Impact::Serious => Priority::High,
        Impact::Moderate => Priority::Medium,
        Impact::Minor => Priority::Low,
        Impact::Unknown => Priority::Medium,
    }
}

pub fn estimate_effort(node_count: usize, impact: Impact) -> Effort {
    let base = match impact {
        Impact::Critical => 3,
        Impact::Serious => 2,
        Impact::Moderate | Impact::Minor | Impact::Unknown => 1,
    };
    let score = base * node_count.min(MAX_EFFORT_NODES);
    if score <= 2 {
        Effort::Low
    } else if score <= 4 {
        Effort::Medium
    } else {
        Effort::High
    }
}

pub fn estimate_timeline(node_count: usize, impact: Impact) -> Timeline {
    let base_days = match impact {
        Impact::Critical => 2.0,
        Impact::Serious => 1.0,
        Impact::Moderate | Impact::Unknown => 0.5,
        Impact::Minor => 0.25,
    };
    let days = base_days * node_count.min(MAX_TIMELINE_NODES) as f64;
    if days <= 1.0 {
        Timeline::OneDay
    } else if days <= 3.0 {
        Timeline::FewDays
    } else if days <= 7.0 {
        Timeline::OneWeek
    } else {
        Timeline::TwoWeeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::RawNode;

    fn finding(impact: Option<&str>, tags: &[&str], nodes: usize) -> RawFinding {
        RawFinding {
            id: "image-alt".to_string(),
            help: "Images must have alternate text".to_string(),
            description: "Ensures <img> elements have alternate text".to_string(),
            impact: impact.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            help_url: None,
            nodes: (0..nodes)
                .map(|i| RawNode {
                    target: vec![serde_json::json!(format!("img:nth-child({})", i + 1))],
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_critical_violation_with_six_nodes() {
        let issue = normalize_finding(
            &finding(Some("critical"), &["cat.text-alternatives", "wcag2a"], 6),
            FindingKind::Violation,
        );
        assert_eq!(issue.wcag_level, WcagLevel::A);
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(issue.priority, Priority::High);
        assert_eq!(issue.effort, Effort::High);
        assert_eq!(issue.timeline, Timeline::TwoWeeks);
        assert_eq!(issue.elements.len(), 6);
        assert_eq!(issue.elements[0], "img:nth-child(1)");
    }

    #[test]
    fn test_needs_review_ignores_impact() {
        for impact in ["critical", "serious", "moderate", "minor"] {
            let issue = normalize_finding(&finding(Some(impact), &[], 1), FindingKind::NeedsReview);
            assert_eq!(issue.severity, Severity::Warning);
            assert_eq!(issue.priority, Priority::Medium);
        }
    }

    #[test]
    fn test_missing_impact_defaults_to_moderate() {
        let issue = normalize_finding(&finding(None, &[], 3), FindingKind::Violation);
        assert_eq!(issue.impact, Impact::Moderate);
        assert_eq!(issue.reported_impact, "moderate");
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.priority, Priority::Medium);
        assert_eq!(issue.wcag_level, WcagLevel::AA);
        // 1 * 3 = 3 → Medium; 0.5 * 3 = 1.5 → 2-3 days
        assert_eq!(issue.effort, Effort::Medium);
        assert_eq!(issue.timeline, Timeline::FewDays);
    }

    #[test]
    fn test_unknown_impact() {
        let issue = normalize_finding(&finding(Some("extreme"), &[], 2), FindingKind::Violation);
        assert_eq!(issue.impact, Impact::Unknown);
        assert_eq!(issue.reported_impact, "extreme");
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.priority, Priority::Medium);
        assert_eq!(issue.effort, Effort::Low);
        assert_eq!(issue.timeline, Timeline::OneDay);
    }

    #[test]
    fn test_wcag_tag_priority_order() {
        let tags = |t: &[&str]| t.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(wcag_level(&tags(&["wcag21aa", "wcag2aaa"])), WcagLevel::AAA);
        assert_eq!(wcag_level(&tags(&["wcag2aa", "wcag2a"])), WcagLevel::A);
        assert_eq!(wcag_level(&tags(&["wcag21a"])), WcagLevel::A);
        assert_eq!(wcag_level(&tags(&["best-practice"])), WcagLevel::AA);
        assert_eq!(wcag_level(&[]), WcagLevel::AA);
    }

    #[test]
    fn test_effort_thresholds() {
        assert_eq!(estimate_effort(0, Impact::Critical), Effort::Low);
        assert_eq!(estimate_effort(2, Impact::Minor), Effort::Low);
        assert_eq!(estimate_effort(2, Impact::Serious), Effort::Medium);
        assert_eq!(estimate_effort(1, Impact::Critical), Effort::Medium);
        assert_eq!(estimate_effort(2, Impact::Critical), Effort::High);
        // node count is capped at 5
        assert_eq!(estimate_effort(50, Impact::Minor), Effort::High);
    }

    #[test]
    fn test_timeline_thresholds() {
        assert_eq!(estimate_timeline(4, Impact::Minor), Timeline::OneDay);
        assert_eq!(estimate_timeline(3, Impact::Serious), Timeline::FewDays);
        assert_eq!(estimate_timeline(7, Impact::Serious), Timeline::OneWeek);
        assert_eq!(estimate_timeline(4, Impact::Critical), Timeline::TwoWeeks);
        // node count is capped at 10: 0.25 * 10 = 2.5
        assert_eq!(estimate_timeline(100, Impact::Minor), Timeline::FewDays);
    }

    #[test]
    fn test_normalize_scan_keeps_order() {
        let mut incomplete = finding(Some("serious"), &[], 1);
        incomplete.id = "color-contrast".to_string();
        let scan = RawScanResult {
            violations: vec![finding(Some("minor"), &[], 1)],
            incomplete: vec![incomplete],
        };
        let issues = normalize_scan(&scan);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].id, "image-alt");
        assert_eq!(issues[0].kind, FindingKind::Violation);
        assert_eq!(issues[1].id, "color-contrast");
        assert_eq!(issues[1].kind, FindingKind::NeedsReview);
    }
}
