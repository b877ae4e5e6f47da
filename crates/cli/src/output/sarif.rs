use std::collections::BTreeMap;

use a11y_audit::issue::Severity;
use a11y_audit::Report;
use anyhow::Result;
use serde_json::{json, Value};

/// Print SARIF 2.1.0 output, one run per audited page.
pub fn print(reports: &[Report]) -> Result<()> {
    let json = serde_json::to_string_pretty(&to_sarif(reports))?;
    println!("{json}");
    Ok(())
}

pub fn to_sarif(reports: &[Report]) -> Value {
    json!({
        "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": reports.iter().map(run).collect::<Vec<_>>()
    })
}

fn run(report: &Report) -> Value {
    // One rule per scanner rule id, first occurrence wins.
    let mut rules: BTreeMap<&str, Value> = BTreeMap::new();
    for issue in &report.issues {
        rules.entry(issue.id.as_str()).or_insert_with(|| {
            let mut rule = json!({
                "id": issue.id,
                "shortDescription": { "text": issue.title },
                "defaultConfiguration": { "level": severity_to_sarif_level(&issue.severity) },
                "properties": { "tags": [format!("wcag-{}", issue.wcag_level)] }
            });
            if let Some(url) = &issue.help_url {
                rule["helpUri"] = json!(url);
            }
            rule
        });
    }

    let results: Vec<Value> = report
        .issues
        .iter()
        .map(|issue| {
            let logical: Vec<Value> = issue
                .elements
                .iter()
                .map(|selector| json!({ "fullyQualifiedName": selector, "kind": "element" }))
                .collect();
            let text = if issue.description.is_empty() {
                &issue.title
            } else {
                &issue.description
            };

            json!({
                "ruleId": issue.id,
                "level": severity_to_sarif_level(&issue.severity),
                "message": { "text": text },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": { "uri": report.url }
                    },
                    "logicalLocations": logical
                }],
                "properties": {
                    "priority": issue.priority.to_string(),
                    "effort": issue.effort.to_string(),
                    "timeline": issue.timeline.label(),
                    "recommendation": issue.recommendation
                }
            })
        })
        .collect();

    json!({
        "tool": {
            "driver": {
                "name": "a11y-audit",
                "version": env!("CARGO_PKG_VERSION"),
                "rules": rules.into_values().collect::<Vec<_>>()
            }
        },
        "results": results,
        "properties": {
            "overallScore": report.executive_summary.overall_score
        }
    })
}

fn severity_to_sarif_level(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "error",
        Severity::Warning => "warning",
        Severity::Info => "note",
    }
}
