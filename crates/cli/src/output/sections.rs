//! Plain-text renderings of report sections, suitable for pasting into slides
//! or a requirements document.

use a11y_audit::issue::{Issue, WcagLevel};
use a11y_audit::requirements::{Bucket, Requirement};
use a11y_audit::Report;

use crate::Section;

/// Sections in report order, as exported by `Section::All`.
const ORDER: [Section; 6] = [
    Section::ExecutiveSummary,
    Section::WcagCompliance,
    Section::DetailedIssues,
    Section::TriagePlan,
    Section::CulturalAccessibility,
    Section::PrdRequirements,
];

pub fn render(report: &Report, section: Section) -> String {
    match section {
        Section::ExecutiveSummary => executive_summary(report),
        Section::WcagCompliance => wcag_compliance(report),
        Section::DetailedIssues => detailed_issues(report),
        Section::TriagePlan => triage_plan(report),
        Section::CulturalAccessibility => cultural_accessibility(report),
        Section::PrdRequirements => prd_requirements(report),
        Section::All => ORDER
            .iter()
            .map(|s| render(report, *s))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn bullets(items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("• {item}")).collect()
}

fn executive_summary(report: &Report) -> String {
    let summary = &report.executive_summary;
    let mut lines = vec![
        "Executive Summary - Accessibility Audit".to_string(),
        format!("URL: {}", report.url),
        format!("Generated: {}", report.timestamp.format("%Y-%m-%d")),
        String::new(),
        "Key Metrics:".to_string(),
        format!("• Overall Accessibility Score: {}/100", summary.overall_score),
        format!("• Critical Issues: {}", summary.critical_issues),
        format!("• Warning Issues: {}", summary.warning_issues),
        format!("• Total Issues: {}", summary.total_issues),
        String::new(),
        "Key Findings:".to_string(),
    ];
    lines.extend(bullets(&summary.key_findings));
    lines.push(String::new());
    lines.push("Business Impact:".to_string());
    lines.extend(bullets(&summary.business_impact));
    lines.push(String::new());
    lines.push("Immediate Actions Required:".to_string());
    let top = summary.recommendations.len().min(3);
    lines.extend(bullets(&summary.recommendations[..top]));
    lines.join("\n")
}

fn wcag_compliance(report: &Report) -> String {
    let mut lines = vec!["WCAG Compliance Assessment".to_string()];
    for level in WcagLevel::ALL {
        let score = report.wcag_compliance.level(level);
        lines.push(String::new());
        lines.push(format!("WCAG Level {level}"));
        lines.push(format!("Score: {}/100", score.score));
        lines.push(format!(
            "Issues: {} ({} critical)",
            score.total, score.critical
        ));
    }
    lines.join("\n")
}

fn detailed_issues(report: &Report) -> String {
    let mut lines = vec!["Detailed Issues".to_string()];
    for issue in &report.issues {
        let shown = issue.elements.len().min(3);
        lines.push(String::new());
        lines.push(format!("{} ({})", issue.title, issue.wcag_level));
        lines.push(format!("Priority: {}", issue.priority));
        lines.push(format!("Description: {}", issue.description));
        lines.push(format!("Impact: {}", issue.reported_impact));
        lines.push(format!(
            "Affected Elements: {}",
            issue.elements[..shown].join(", ")
        ));
        lines.push(format!(
            "Effort: {} | Timeline: {}",
            issue.effort, issue.timeline
        ));
        lines.push(format!("Recommendation: {}", issue.recommendation));
    }
    lines.join("\n")
}

fn tier(title: &str, issues: &[Issue]) -> Vec<String> {
    let mut lines = vec![String::new(), format!("{title}:")];
    lines.extend(
        issues
            .iter()
            .map(|issue| format!("• {} - {}", issue.title, issue.timeline)),
    );
    lines
}

fn triage_plan(report: &Report) -> String {
    let plan = &report.triage_plan;
    let mut lines = vec!["Triage Plan".to_string()];
    lines.extend(tier("Immediate Actions (Critical Priority)", &plan.immediate));
    lines.extend(tier("Short-term Actions (1-2 weeks)", &plan.short_term));
    lines.extend(tier("Long-term Actions (1+ months)", &plan.long_term));
    lines.push(String::new());
    lines.push(format!(
        "Estimated Total Effort: {} story points",
        plan.estimated_effort
    ));
    lines.join("\n")
}

fn cultural_accessibility(report: &Report) -> String {
    let considerations = &report.cultural_considerations;
    let mut lines = vec![
        "Cultural & Situational Accessibility".to_string(),
        String::new(),
        "Language & Localization:".to_string(),
    ];
    lines.extend(bullets(&considerations.language));
    lines.push(String::new());
    lines.push("Cultural Considerations:".to_string());
    lines.extend(bullets(&considerations.cultural));
    lines.push(String::new());
    lines.push("Situational Accessibility:".to_string());
    lines.extend(bullets(&considerations.situational));
    lines.join("\n")
}

fn requirement(req: &Requirement) -> Vec<String> {
    vec![
        String::new(),
        req.requirement.clone(),
        format!("Why this matters: {}", req.benefit),
        format!("User Impact: {}", req.user_impact),
        format!("Implementation: {}", req.implementation),
        format!(
            "Priority: {} | Affected Elements: {}",
            req.priority, req.affected_elements
        ),
    ]
}

fn prd_requirements(report: &Report) -> String {
    let mut lines = vec!["Product Requirements for PRD".to_string()];
    for bucket in Bucket::ALL {
        lines.push(String::new());
        lines.push(format!("{}:", bucket.title()));
        for req in report.prd_requirements.bucket(bucket) {
            lines.extend(requirement(req));
        }
    }
    lines.join("\n")
}
