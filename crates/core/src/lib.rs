pub mod config;
pub mod error;
pub mod finding;
pub mod generator;
pub mod issue;
pub mod report;
pub mod requirements;
pub mod scoring;
pub mod triage;

pub use error::{AuditError, AuditResult};
pub use report::{build_report, build_report_from_payload, Report};
