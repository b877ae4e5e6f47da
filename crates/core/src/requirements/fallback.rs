use super::categories::{group_by_category, Category};
use super::types::{Requirement, RequirementPriority, RequirementSet};
use crate::issue::{Issue, Priority, Severity};
use crate::scoring::WcagCompliance;

/// Above this many issues a governance requirement is added.
const GOVERNANCE_THRESHOLD: usize = 10;
/// Above this many issues a manual testing requirement is added.
const MANUAL_TESTING_THRESHOLD: usize = 5;
const MAX_SAMPLES: usize = 3;

struct Prose {
    requirement: &'static str,
    benefit: &'static str,
    user_impact: &'static str,
    implementation: &'static str,
}

fn prose(label: &str) -> Prose {
    match label {
        "keyboard" => Prose {
            requirement: "Make every interactive element operable with the keyboard alone",
            benefit: "Keyboard and switch users can complete every task",
            user_impact: "Users who cannot use a mouse are no longer blocked",
            implementation: "Use native controls or add tabindex and key handlers to custom widgets",
        },
        "color-contrast" => Prose {
            requirement: "Meet minimum color contrast for text and UI components",
            benefit: "Content stays readable in poor lighting and for low-vision users",
            user_impact: "Low-vision and color-blind users can read all text",
            implementation: "Raise contrast to at least 4.5:1 for body text and 3:1 for large text",
        },
        "images" => Prose {
            requirement: "Provide text alternatives for all meaningful images",
            benefit: "Image content is available to screen readers and search engines",
            user_impact: "Blind users receive the information images convey",
            implementation: "Add descriptive alt text, or empty alt for decorative images",
        },
        "forms" => Prose {
            requirement: "Associate every form control with a visible label",
            benefit: "Forms can be understood and completed without guessing",
            user_impact: "Screen reader users know what each field expects",
            implementation: "Link labels with for/id or aria-labelledby and keep instructions next to fields",
        },
        "focus-order" => Prose {
            requirement: "Keep focus order logical and the focus indicator visible",
            benefit: "Navigation follows the visual reading order",
            user_impact: "Keyboard users always know where they are on the page",
            implementation: "Align DOM order with visual order and style :focus-visible on all controls",
        },
        "headings" => Prose {
            requirement: "Structure content with a consistent heading hierarchy",
            benefit: "Pages can be scanned and navigated by section",
            user_impact: "Screen reader users can jump between sections efficiently",
            implementation: "Use a single h1 and nest h2-h6 without skipping levels",
        },
        "aria" => Prose {
            requirement: "Use ARIA roles and attributes only where valid and necessary",
            benefit: "Assistive technologies receive accurate semantics",
            user_impact: "Custom widgets are announced correctly",
            implementation: "Fix invalid roles and attributes and prefer native HTML semantics",
        },
        "landmarks" => Prose {
            requirement: "Wrap page content in landmark regions",
            benefit: "Page layout is exposed to assistive technologies",
            user_impact: "Screen reader users can skip straight to main content",
            implementation: "Use header, nav, main and footer elements so all content sits in a region",
        },
        _ => Prose {
            requirement: "Resolve accessibility issues",
            benefit: "Improves accessibility",
            user_impact: "More users can use the page",
            implementation: "Fix the issues reported by the audit",
        },
    }
}

/// Rule-based requirement synthesis. Pure: equal inputs give equal output.
pub fn fallback_requirements(issues: &[Issue], compliance: &WcagCompliance) -> RequirementSet {
    let mut set = RequirementSet::default();

    for (category, members) in group_by_category(issues) {
        if members.is_empty() {
            continue;
        }
        set.bucket_mut(category.bucket)
            .push(category_requirement(category, &members));
    }

    let total = issues.len();
    if total > 0 {
        set.testing.push(Requirement {
            requirement: "Integrate automated accessibility checks into the delivery pipeline"
                .to_string(),
            benefit: "Regressions are caught before they reach users".to_string(),
            user_impact: "Fixed barriers stay fixed across releases".to_string(),
            implementation: format!(
                "Run the accessibility scanner on every build and fail on new violations; this audit found {} issue{} automatically",
                total,
                plural(total)
            ),
            priority: RequirementPriority::High,
            affected_elements: total,
        });
    }
    if total > MANUAL_TESTING_THRESHOLD {
        let needs_review = issues.iter().filter(|i| !i.is_violation()).count();
        let critical = issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .count();
        set.testing.push(Requirement {
            requirement: "Conduct manual testing with assistive technologies".to_string(),
            benefit: "Covers barriers automated tools cannot decide on".to_string(),
            user_impact: "Real screen reader and keyboard journeys are verified".to_string(),
            implementation: format!(
                "Schedule keyboard-only and screen reader passes covering {} item{} needing review and {} critical issue{}",
                needs_review,
                plural(needs_review),
                critical,
                plural(critical)
            ),
            priority: RequirementPriority::Medium,
            affected_elements: needs_review + critical,
        });
    }

    let level_a = compliance.level_a.total;
    let level_aa = compliance.level_aa.total;
    let compliance_priority = if level_a > 0 {
        RequirementPriority::Critical
    } else if level_aa > 0 {
        RequirementPriority::High
    } else {
        RequirementPriority::Low
    };
    set.compliance.push(Requirement {
        requirement: "Achieve WCAG 2.1 AA compliance".to_string(),
        benefit: "Meets international accessibility standards".to_string(),
        user_impact: "Ensures broad accessibility coverage and reduces legal risk".to_string(),
        implementation: format!(
            "Resolve the {} Level A and {} Level AA issues identified in the audit",
            level_a, level_aa
        ),
        priority: compliance_priority,
        affected_elements: compliance.aa_blocking_total(),
    });

    if total > GOVERNANCE_THRESHOLD {
        set.compliance.push(Requirement {
            requirement: "Establish accessibility governance and ownership".to_string(),
            benefit: "Accessibility becomes part of the definition of done".to_string(),
            user_impact: "New features ship accessible by default".to_string(),
            implementation: format!(
                "Assign an accessibility owner, train the team on WCAG and re-audit after remediating the {} issues found",
                total
            ),
            priority: RequirementPriority::High,
            affected_elements: total,
        });
    }

    set
}

fn category_requirement(category: &Category, members: &[&Issue]) -> Requirement {
    let text = prose(category.label);
    let count = members.len();
    let samples: Vec<&str> = members
        .iter()
        .flat_map(|i| i.elements.iter())
        .take(MAX_SAMPLES)
        .map(String::as_str)
        .collect();

    let implementation = if samples.is_empty() {
        format!("{}.", text.implementation)
    } else {
        format!(
            "{}. Start with: {}",
            text.implementation,
            samples.join(", ")
        )
    };

    let priority = if members.iter().any(|i| i.severity == Severity::Critical) {
        RequirementPriority::Critical
    } else if members.iter().any(|i| i.priority == Priority::High) {
        RequirementPriority::High
    } else {
        RequirementPriority::Medium
    };

    Requirement {
        requirement: format!(
            "{} ({} {} issue{})",
            text.requirement,
            count,
            category.label,
            plural(count)
        ),
        benefit: text.benefit.to_string(),
        user_impact: text.user_impact.to_string(),
        implementation,
        priority,
        affected_elements: members.iter().map(|i| i.elements.len()).sum(),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
