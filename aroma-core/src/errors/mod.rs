//! Error handling for Aroma.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod ingest_error;
pub mod rule_error;
pub mod source_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use ingest_error::IngestError;
pub use rule_error::RuleError;
pub use source_error::SourceError;
