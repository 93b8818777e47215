//! Skew rule types.

use serde::Serialize;

use aroma_core::types::GroupName;

use crate::groups::GroupCounters;

/// Type alias for skew predicate functions.
pub type SkewCheckFn = Box<dyn Fn(&GroupCounters) -> bool + Send + Sync>;

/// One threshold predicate over a group's counters.
///
/// Thresholds are compiled into the rule table; they are not configurable at
/// runtime. Declaration order is part of the contract: fragments of every
/// firing rule concatenate in that order.
pub struct SkewRule {
    /// Rule identifier.
    pub id: &'static str,
    /// The group this rule applies to.
    pub group: GroupName,
    /// The predicate: returns true if the skew is present.
    pub check: SkewCheckFn,
    /// Fragment appended to the psycho-emotional text when firing. Empty
    /// when the rule only speaks somatically.
    pub psycho_emotional: &'static str,
    /// Fragment appended to the somatic text when firing.
    pub somatic: &'static str,
}

/// Interpretation output of one group's skew analysis. Either half may be
/// empty, meaning "no notable skew", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkewText {
    pub psycho_emotional: String,
    pub somatic: String,
}

impl SkewText {
    pub fn is_empty(&self) -> bool {
        self.psycho_emotional.is_empty() && self.somatic.is_empty()
    }
}
