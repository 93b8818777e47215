//! aroma-analysis: the rule-evaluation core of the Aroma questionnaire
//! analyzer.
//!
//! One analysis run is a single synchronous pass over an input snapshot:
//! - Source: the tabular input and dictionary records, read once per run
//! - Facts: ingestion validation and the per-oil fact index
//! - Dictionary: (oil, zone) interpretation lookup and combination-text
//!   expansion
//! - Rules: the static multi-oil combination rule table
//! - Combinations: the ALL/ANY matching engine producing ranked findings
//! - Groups: per-group zone counters
//! - Skew: threshold rules over group counters
//! - Engine: the runner assembling the structured report

pub mod combinations;
pub mod dictionary;
pub mod engine;
pub mod facts;
pub mod groups;
pub mod rules;
pub mod skew;
pub mod source;

// Re-exports for convenience
pub use combinations::{CombinationEngine, Finding};
pub use dictionary::{DictionaryEntry, DictionaryLookup};
pub use engine::{AnalysisReport, Analyzer};
pub use facts::{ingest, FactIndex, Ingestion};
pub use groups::{GroupAggregator, GroupCounters};
pub use rules::{Quantifier, Rule, RuleBase};
pub use skew::{SkewAnalyzer, SkewText};
pub use source::{DictionaryRecord, InputRecord, MemorySource, TabularSource};
