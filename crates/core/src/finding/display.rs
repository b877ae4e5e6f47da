use std::fmt;

use super::types::{FindingKind, Impact, RawFinding};

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::Violation => write!(f, "violation"),
            FindingKind::NeedsReview => write!(f, "needs review"),
        }
    }
}

impl fmt::Display for RawFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({} nodes)",
            self.impact.as_deref().unwrap_or("moderate"),
            self.id,
            self.nodes.len()
        )
    }
}
