mod display;
pub mod normalize;
pub mod types;

pub use normalize::{normalize_finding, normalize_scan};
pub use types::*;
