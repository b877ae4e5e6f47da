pub mod json;
pub mod sarif;
pub mod sections;
pub mod text;
