use a11y_audit::finding::{FindingKind, RawFinding, RawNode, RawScanResult};
use a11y_audit::issue::{normalize_finding, normalize_scan, Priority, Severity, WcagLevel};
use a11y_audit::requirements::fallback_requirements;
use a11y_audit::scoring::WcagCompliance;
use a11y_audit::triage::TriagePlan;
use proptest::prelude::*;

fn impact_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("minor".to_string())),
        Just(Some("moderate".to_string())),
        Just(Some("serious".to_string())),
        Just(Some("critical".to_string())),
        "[a-z]{1,8}".prop_map(Some),
    ]
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("wcag2a".to_string()),
            Just("wcag2aa".to_string()),
            Just("wcag2aaa".to_string()),
            Just("wcag21a".to_string()),
            Just("wcag21aa".to_string()),
            Just("wcag21aaa".to_string()),
            Just("best-practice".to_string()),
            Just("cat.color".to_string()),
        ],
        0..4,
    )
}

fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("color-contrast".to_string()),
        Just("image-alt".to_string()),
        Just("label".to_string()),
        Just("aria-roles".to_string()),
        Just("focus-order-semantics".to_string()),
        Just("landmark-one-main".to_string()),
        Just("heading-order".to_string()),
        Just("duplicate-id".to_string()),
    ]
}

fn finding_strategy() -> impl Strategy<Value = RawFinding> {
    (id_strategy(), impact_strategy(), tags_strategy(), 0usize..15).prop_map(
        |(id, impact, tags, nodes)| RawFinding {
            id: id.clone(),
            help: format!("{id} help"),
            description: String::new(),
            impact,
            tags,
            help_url: None,
            nodes: (0..nodes)
                .map(|n| RawNode {
                    target: vec![serde_json::json!(format!("#{id}-{n}"))],
                    ..Default::default()
                })
                .collect(),
        },
    )
}

fn scan_strategy() -> impl Strategy<Value = RawScanResult> {
    (
        prop::collection::vec(finding_strategy(), 0..20),
        prop::collection::vec(finding_strategy(), 0..10),
    )
        .prop_map(|(violations, incomplete)| RawScanResult {
            violations,
            incomplete,
        })
}

proptest! {
    #[test]
    fn critical_violation_is_critical_high(mut finding in finding_strategy()) {
        finding.impact = Some("critical".to_string());
        let issue = normalize_finding(&finding, FindingKind::Violation);
        prop_assert_eq!(issue.severity, Severity::Critical);
        prop_assert_eq!(issue.priority, Priority::High);
    }

    #[test]
    fn needs_review_is_warning_medium(finding in finding_strategy()) {
        let issue = normalize_finding(&finding, FindingKind::NeedsReview);
        prop_assert_eq!(issue.severity, Severity::Warning);
        prop_assert_eq!(issue.priority, Priority::Medium);
    }

    #[test]
    fn elements_preserve_node_order(finding in finding_strategy()) {
        let issue = normalize_finding(&finding, FindingKind::Violation);
        let expected: Vec<String> = finding.nodes.iter().map(|n| n.selector()).collect();
        prop_assert_eq!(issue.elements, expected);
    }

    #[test]
    fn score_formula_holds(scan in scan_strategy()) {
        let issues = normalize_scan(&scan);
        let compliance = WcagCompliance::assess(&issues);
        for level in WcagLevel::ALL {
            let total = issues.iter().filter(|i| i.wcag_level == level).count() as i64;
            let expected = (100 - total * level.penalty() as i64).max(0) as u32;
            prop_assert_eq!(compliance.level(level).total as i64, total);
            prop_assert_eq!(compliance.level(level).score, expected);
        }
    }

    #[test]
    fn estimated_effort_is_order_independent(scan in scan_strategy()) {
        let issues = normalize_scan(&scan);
        let expected: u32 = issues.iter().map(|i| i.effort.weight()).sum();
        let mut reversed = issues.clone();
        reversed.reverse();
        prop_assert_eq!(TriagePlan::plan(&issues).estimated_effort, expected);
        prop_assert_eq!(TriagePlan::plan(&reversed).estimated_effort, expected);
    }

    #[test]
    fn triage_tiers_are_disjoint(scan in scan_strategy()) {
        let issues = normalize_scan(&scan);
        let plan = TriagePlan::plan(&issues);
        prop_assert!(plan.tiered_count() <= issues.len());
        prop_assert!(plan.immediate.iter().all(|i| i.severity == Severity::Critical && i.priority == Priority::High));
        prop_assert!(plan.long_term.iter().all(|i| i.severity == Severity::Warning && i.priority != Priority::High));
    }

    #[test]
    fn fallback_is_deterministic(scan in scan_strategy()) {
        let issues = normalize_scan(&scan);
        let compliance = WcagCompliance::assess(&issues);
        let first = serde_json::to_string(&fallback_requirements(&issues, &compliance)).unwrap();
        let second = serde_json::to_string(&fallback_requirements(&issues, &compliance)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fallback_always_has_one_wcag_requirement(scan in scan_strategy()) {
        let issues = normalize_scan(&scan);
        let compliance = WcagCompliance::assess(&issues);
        let set = fallback_requirements(&issues, &compliance);
        let expected = if issues.len() > 10 { 2 } else { 1 };
        prop_assert_eq!(set.compliance.len(), expected);
        prop_assert_eq!(set.compliance[0].affected_elements, compliance.aa_blocking_total());
        prop_assert_eq!(set.testing.is_empty(), issues.is_empty());
    }
}
