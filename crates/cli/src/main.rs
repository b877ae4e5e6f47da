mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "a11y-audit")]
#[command(about = "Turn accessibility scan results into a scored, triaged audit report")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build audit reports from saved scan results
    Analyze {
        /// Scan payload (.json) or directory of payloads
        path: PathBuf,

        /// Audited page URL (defaults to the URL recorded by the scanner)
        #[arg(short, long)]
        url: Option<String>,

        /// Output format (defaults to the config file setting)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to config file (default: .a11y-audit.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the text generator and use rule-based requirements
        #[arg(long)]
        offline: bool,

        /// Exit with status 1 when any overall score is below this value
        #[arg(long, value_name = "SCORE")]
        fail_under: Option<u32>,

        /// Suppress banner and summary
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Print one section of a saved JSON report as plain text
    Export {
        /// Report written by `analyze --format json`
        report: PathBuf,

        /// Section to export
        #[arg(short, long, default_value = "all")]
        section: Section,
    },
    /// List requirement categories and the rule-id keywords that select them
    Categories,
    /// Generate a default .a11y-audit.toml config file
    Init,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Sarif,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "sarif" => Some(OutputFormat::Sarif),
            _ => None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    ExecutiveSummary,
    WcagCompliance,
    DetailedIssues,
    TriagePlan,
    CulturalAccessibility,
    PrdRequirements,
    All,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("a11y_audit=debug")
        } else {
            EnvFilter::new("a11y_audit=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            path,
            url,
            format,
            config,
            offline,
            fail_under,
            quiet,
            no_color,
        } => commands::analyze::run(commands::analyze::AnalyzeOptions {
            path,
            url,
            format,
            config,
            offline,
            fail_under,
            quiet,
            no_color,
        }),
        Commands::Export { report, section } => commands::export::run(&report, section),
        Commands::Categories => commands::categories::run(),
        Commands::Init => commands::init::run(),
    }
}
