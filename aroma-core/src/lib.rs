//! aroma-core: foundation types for the Aroma questionnaire analysis engine.
//!
//! This crate holds everything the engine crates share:
//! - Types: zones, ranks, facts, oil and group identifiers
//! - Errors: one enum per subsystem, `thiserror` only
//! - Config: the immutable analysis profile injected into every component
//! - Observe: tracing initialization

pub mod config;
pub mod errors;
pub mod observe;
pub mod types;

// Re-exports for convenience
pub use config::AnalysisProfile;
pub use errors::{AnalysisError, ConfigError, IngestError, RuleError, SourceError};
pub use types::{Fact, GroupName, OilId, Rank, RowRef, Zone};
