use chrono::Utc;
use tracing::debug;

use super::types::{CulturalConsiderations, ExecutiveSummary, Report};
use super::url::validate_url;
use crate::error::{AuditError, AuditResult};
use crate::finding::{PageInfo, RawScanResult, ScanPayload};
use crate::issue::normalize_scan;
use crate::requirements::RequirementSynthesizer;
use crate::scoring::WcagCompliance;
use crate::triage::TriagePlan;

/// Assemble the audit report for one scanned page.
///
/// The only failure is an invalid `url`; malformed findings are absorbed by
/// normalization defaults and generator failures by the rule-based fallback.
pub fn build_report(
    url: &str,
    page_info: PageInfo,
    scan: &RawScanResult,
    synthesizer: &RequirementSynthesizer,
) -> AuditResult<Report> {
    validate_url(url)?;

    let issues = normalize_scan(scan);
    let wcag_compliance = WcagCompliance::assess(&issues);
    let triage_plan = TriagePlan::plan(&issues);
    let executive_summary = ExecutiveSummary::summarize(&issues, &wcag_compliance);
    let (prd_requirements, requirements_source) =
        synthesizer.synthesize(&issues, &wcag_compliance, url);

    debug!(
        url,
        issues = issues.len(),
        overall_score = executive_summary.overall_score,
        "assembled report"
    );

    Ok(Report {
        url: url.to_string(),
        page_info,
        timestamp: Utc::now(),
        executive_summary,
        wcag_compliance,
        issues,
        triage_plan,
        cultural_considerations: CulturalConsiderations::default(),
        prd_requirements,
        requirements_source,
    })
}

/// Build a report from a scanner response. `url` overrides the page URL the
/// scanner reported.
pub fn build_report_from_payload(
    payload: &ScanPayload,
    url: Option<&str>,
    synthesizer: &RequirementSynthesizer,
) -> AuditResult<Report> {
    if !payload.success {
        return Err(AuditError::ScanFailed {
            reason: payload
                .error
                .clone()
                .unwrap_or_else(|| "analysis failed".to_string()),
        });
    }
    let url = url.unwrap_or(&payload.page_info.url);
    build_report(url, payload.page_info.clone(), &payload.results, synthesizer)
}
