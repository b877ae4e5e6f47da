use a11y_audit::Report;
use anyhow::Result;

/// A single report prints as an object, several as an array.
pub fn print(reports: &[Report]) -> Result<()> {
    let json = match reports {
        [report] => serde_json::to_string_pretty(report)?,
        _ => serde_json::to_string_pretty(reports)?,
    };
    println!("{json}");
    Ok(())
}
