pub mod error;
pub mod manifest;
pub mod report;
