//! Findings: fired rule instances.

use aroma_core::types::{Fact, OilId};

use crate::rules::Rule;

/// One fired combination rule with its supporting facts.
///
/// Findings are produced fresh each run and never outlive the pass; the rule
/// is borrowed from the rule base, not owned.
#[derive(Debug, Clone)]
pub struct Finding<'r> {
    pub main_oil: OilId,
    pub rule: &'r Rule,
    /// Companion facts that satisfied the rule, in companion declaration
    /// order, then input row order.
    pub matched_facts: Vec<Fact>,
    pub priority: u32,
}

impl Finding<'_> {
    /// Display labels of the matched facts, e.g. `"Bergamot (+++, rank 2)"`.
    pub fn matched_labels(&self) -> Vec<String> {
        self.matched_facts.iter().map(Fact::label).collect()
    }
}
