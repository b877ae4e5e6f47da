use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::WalkDir;

use a11y_audit::config::{apply_suppressions, Config};
use a11y_audit::finding::ScanPayload;
use a11y_audit::requirements::RequirementSynthesizer;
use a11y_audit::{build_report_from_payload, Report};
use a11y_audit_generators::synthesizer_from_config;

use crate::output;
use crate::OutputFormat;

const DEFAULT_CONFIG: &str = ".a11y-audit.toml";

pub struct AnalyzeOptions {
    pub path: PathBuf,
    pub url: Option<String>,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
    pub offline: bool,
    pub fail_under: Option<u32>,
    pub quiet: bool,
    pub no_color: bool,
}

pub fn run(opts: AnalyzeOptions) -> Result<()> {
    // 1. Config
    let config_path = opts
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = Config::load(&config_path)?;
    let format = match opts.format {
        Some(format) => format,
        None => OutputFormat::parse(&config.global.output_format).with_context(|| {
            format!(
                "unknown output_format {:?} in {}",
                config.global.output_format,
                config_path.display()
            )
        })?,
    };

    // 2. Collect scan payloads
    let files = collect_payloads(&opts.path)?;
    if files.is_empty() {
        bail!("no scan payloads (.json) found under {}", opts.path.display());
    }
    if opts.url.is_some() && files.len() > 1 {
        bail!("--url applies to a single payload, found {}", files.len());
    }
    if !opts.quiet {
        eprintln!("Analyzing {} scan payloads...", files.len());
    }

    let payloads = files
        .iter()
        .map(|path| load_payload(path, &config))
        .collect::<Result<Vec<_>>>()?;

    // 3. Requirement strategy
    let synthesizer = if opts.offline {
        RequirementSynthesizer::offline()
    } else {
        synthesizer_from_config(&config.generator)
    };
    debug!(
        generator = synthesizer.generator_name().unwrap_or("offline"),
        "requirement strategy selected"
    );

    // 4. Build reports, one per payload
    let reports: Vec<Report> = files
        .par_iter()
        .zip(payloads.par_iter())
        .map(|(path, payload)| {
            build_report_from_payload(payload, opts.url.as_deref(), &synthesizer)
                .with_context(|| format!("failed to build report for {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(reports = reports.len(), "analysis complete");

    // 5. Output
    match format {
        OutputFormat::Json => output::json::print(&reports)?,
        OutputFormat::Sarif => output::sarif::print(&reports)?,
        OutputFormat::Text => output::text::print(&reports, opts.quiet, opts.no_color)?,
    }

    // 6. Exit code
    if let Some(threshold) = opts.fail_under {
        if below_threshold(&reports, threshold) {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// A single file, or every `.json` file under a directory in path order.
fn collect_payloads(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("path does not exist: {}", path.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

fn load_payload(path: &Path, config: &Config) -> Result<ScanPayload> {
    let mut payload = ScanPayload::load(path)
        .with_context(|| format!("failed to load scan payload {}", path.display()))?;
    payload.results = apply_suppressions(payload.results, config);
    Ok(payload)
}

fn below_threshold(reports: &[Report], threshold: u32) -> bool {
    reports
        .iter()
        .any(|r| r.executive_summary.overall_score < threshold)
}
