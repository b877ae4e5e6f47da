use a11y_audit::issue::{Severity, WcagLevel};
use a11y_audit::requirements::{Bucket, RequirementSource};
use a11y_audit::Report;
use anyhow::Result;
use colored::{ColoredString, Colorize};

pub fn print(reports: &[Report], quiet: bool, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    if !quiet {
        println!();
        println!("{}", "  a11y-audit - Accessibility Audit Report".bold());
        println!("  Pages analyzed: {}", reports.len());
        println!();
    }

    for report in reports {
        print_report(report, quiet);
    }

    Ok(())
}

fn score_label(score: u32) -> ColoredString {
    let text = format!("{score}/100");
    if score >= 80 {
        text.green().bold()
    } else if score >= 60 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn print_report(report: &Report, quiet: bool) {
    let summary = &report.executive_summary;

    println!("{} {}", "==>".bold(), report.url.bold());
    if !report.page_info.title.is_empty() {
        println!("    {}", report.page_info.title.dimmed());
    }
    println!(
        "    Overall score: {}  ({} critical, {} warning, {} total)",
        score_label(summary.overall_score),
        summary.critical_issues,
        summary.warning_issues,
        summary.total_issues
    );
    for level in WcagLevel::ALL {
        let score = report.wcag_compliance.level(level);
        println!(
            "    WCAG {:<4} {}  {} issues ({} critical)",
            level.to_string(),
            score_label(score.score),
            score.total,
            score.critical
        );
    }
    println!();

    if report.issues.is_empty() {
        println!("  {} No accessibility issues found.", "✓".green().bold());
        println!();
    }

    for issue in &report.issues {
        let severity_label = match issue.severity {
            Severity::Critical => "CRITICAL".red().bold(),
            Severity::Warning => "WARNING".yellow().bold(),
            Severity::Info => "INFO".dimmed(),
        };

        println!(
            "  [{}] {} ({}, WCAG {})",
            severity_label, issue.title, issue.id, issue.wcag_level
        );
        if !issue.description.is_empty() {
            println!("    {}", issue.description);
        }
        for element in issue.elements.iter().take(3) {
            println!("    {} {}", "-->".dimmed(), element);
        }
        if issue.elements.len() > 3 {
            println!(
                "    {} and {} more",
                "...".dimmed(),
                issue.elements.len() - 3
            );
        }
        println!(
            "    Effort: {} | Timeline: {} | Priority: {}",
            issue.effort, issue.timeline, issue.priority
        );
        println!("    {} {}", "Fix:".green(), issue.recommendation);
        println!();
    }

    if quiet {
        return;
    }

    let plan = &report.triage_plan;
    println!("{}", "  Triage Plan".bold().underline());
    println!("    Immediate:  {}", plan.immediate.len());
    println!("    Short-term: {}", plan.short_term.len());
    println!("    Long-term:  {}", plan.long_term.len());
    println!("    Effort:     {} story points", plan.estimated_effort);
    println!();

    println!(
        "{} ({})",
        "  Requirements".bold().underline(),
        source_label(report.requirements_source)
    );
    for bucket in Bucket::ALL {
        let reqs = report.prd_requirements.bucket(bucket);
        if reqs.is_empty() {
            continue;
        }
        println!("    {}", bucket.title());
        for req in reqs {
            println!("      [{}] {}", req.priority, req.requirement);
        }
    }
    println!();
}

fn source_label(source: RequirementSource) -> &'static str {
    match source {
        RequirementSource::Generated => "generated",
        RequirementSource::Fallback => "rule-based",
    }
}
