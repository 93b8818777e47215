//! Structured report types consumed by the external renderer.
//!
//! Everything here is plain serializable data: the renderer decides layout,
//! the core decides content.

use serde::Serialize;

use aroma_core::types::{Fact, GroupName, OilId, Rank, RowRef, Zone};

use crate::groups::GroupCounters;
use crate::skew::SkewText;

/// Outcome of one input row: interpretation texts when the dictionary
/// resolved, diagnostics when something about the row needs attention.
#[derive(Debug, Clone, Serialize)]
pub struct RowOutcome {
    pub row: RowRef,
    pub oil: Option<OilId>,
    pub zone: Option<Zone>,
    /// The rank that survived validation, if any.
    pub rank: Option<Rank>,
    pub psycho_emotional: String,
    pub somatic: String,
    /// Human-readable diagnostics, e.g. `"key not found: Orange|+++"`.
    pub diagnostics: Vec<String>,
}

/// A fired combination rule, projected into owned report data.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationFinding {
    pub main_oil: OilId,
    /// Display ordinal of the rule in the source methodology.
    pub number: u32,
    /// Companion facts that satisfied the rule.
    pub matched: Vec<Fact>,
    /// Display labels of the matched facts.
    pub matched_labels: Vec<String>,
    /// Result texts of the rule, each independently meaningful.
    pub results: Vec<String>,
    pub priority: u32,
}

/// Counters and skew interpretation of one declared group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group: GroupName,
    pub counters: GroupCounters,
    pub skew: SkewText,
}

/// Per-zone task collections, labeled in fact-processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneTasks {
    /// `+++`: the key problems, rank-annotated.
    pub key_psycho_emotional: Vec<String>,
    pub key_somatic: Vec<String>,
    /// `---`: the resource states.
    pub resource_psycho_emotional: Vec<String>,
    pub resource_somatic: Vec<String>,
    /// `+` and `-`: supplementary tasks.
    pub plus_psycho_emotional: Vec<String>,
    pub plus_somatic: Vec<String>,
    pub minus_psycho_emotional: Vec<String>,
    pub minus_somatic: Vec<String>,
    /// Oils in the `0` zone (blocked perception).
    pub blocked: Vec<OilId>,
    /// Oils in the `R` zone (reversed perception).
    pub reversed: Vec<OilId>,
    pub neutral_count: u32,
    /// Fixed-template reading of the neutral zone size.
    pub neutral_interpretation: String,
}

/// Priority bucket of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
    Info,
}

/// One fixed-template recommendation derived from the report contents.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub text: String,
    pub priority: RecommendationPriority,
}

/// The full structured output of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub request_label: String,
    pub rows: Vec<RowOutcome>,
    /// Findings sorted descending by priority; equal priorities keep
    /// evaluation order.
    pub findings: Vec<CombinationFinding>,
    /// One entry per declared group, in declaration order.
    pub groups: Vec<GroupReport>,
    /// Notices for oils that are the only one of their group in a zone.
    pub single_oils: Vec<String>,
    pub zone_tasks: ZoneTasks,
    /// Recurring motifs: marker-tagged dictionary texts and the fixed
    /// `---`-zone readings.
    pub motifs: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}
