pub mod config;
pub mod error;
pub mod gwa;
pub mod reports;
pub mod scale;
pub mod session;
pub mod subject;
