pub mod builder;
pub mod types;
pub mod url;

pub use builder::{build_report, build_report_from_payload};
pub use types::*;
pub use url::validate_url;
