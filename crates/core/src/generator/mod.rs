pub mod traits;

pub use traits::{GenerateError, TextGenerator};
