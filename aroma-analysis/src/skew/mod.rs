//! Threshold-based skew analysis over group counters.

pub mod analyzer;
pub mod types;

pub use analyzer::SkewAnalyzer;
pub use types::{SkewCheckFn, SkewRule, SkewText};
