//! The analysis runner and its report types.

pub mod runner;
pub mod types;

pub use runner::Analyzer;
pub use types::{
    AnalysisReport, CombinationFinding, GroupReport, Recommendation, RecommendationPriority,
    RowOutcome, ZoneTasks,
};
