//! Top-level analysis errors.
//! Aggregates subsystem errors via `From` conversions.

use super::{ConfigError, RuleError, SourceError};

/// Errors that abort an analysis run.
///
/// Everything recoverable (invalid rank, duplicate rank, missing dictionary
/// key) is collected as a diagnostic instead and never reaches this enum.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule table error: {0}")]
    Rules(#[from] RuleError),
}
