pub mod analyze;
pub mod categories;
pub mod export;
pub mod init;
