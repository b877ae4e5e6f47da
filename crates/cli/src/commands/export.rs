use std::path::Path;

use anyhow::{Context, Result};

use a11y_audit::Report;

use crate::output::sections;
use crate::Section;

pub fn run(path: &Path, section: Section) -> Result<()> {
    let reports = load_reports(path)?;
    let rendered: Vec<String> = reports
        .iter()
        .map(|report| sections::render(report, section))
        .collect();
    println!("{}", rendered.join("\n\n"));
    Ok(())
}

/// Reads a report saved by `analyze --format json`: one object, or an array
/// when a directory was analyzed.
fn load_reports(path: &Path) -> Result<Vec<Report>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let reports = if value.is_array() {
        serde_json::from_value::<Vec<Report>>(value)
    } else {
        serde_json::from_value::<Report>(value).map(|report| vec![report])
    };
    reports.with_context(|| format!("{} is not an a11y-audit report", path.display()))
}
