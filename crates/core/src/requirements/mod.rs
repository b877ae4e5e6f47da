pub mod categories;
pub mod fallback;
pub mod generative;
pub mod synthesizer;
pub mod types;

pub use categories::{categorize, Category, CATEGORIES};
pub use fallback::fallback_requirements;
pub use synthesizer::RequirementSynthesizer;
pub use types::*;
