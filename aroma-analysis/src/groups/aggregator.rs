//! The group aggregation pass.
//!
//! A pure fold: the output depends only on the multiset of input facts.
//! Counters are built fresh each run.

use tracing::debug;

use aroma_core::config::AnalysisProfile;
use aroma_core::types::collections::FxHashMap;
use aroma_core::types::GroupName;

use crate::dictionary::DictionaryLookup;
use crate::facts::FactIndex;

use super::types::GroupCounters;

/// Buckets each fact into its dictionary-configured group.
pub struct GroupAggregator;

impl GroupAggregator {
    /// Fold the fact index into per-group counters.
    ///
    /// Facts without a dictionary entry contribute nothing (they were already
    /// flagged at row level). Entries naming an undeclared group are dropped
    /// with a log line, not an error.
    pub fn aggregate(
        facts: &FactIndex,
        dictionary: &DictionaryLookup,
        profile: &AnalysisProfile,
    ) -> FxHashMap<GroupName, GroupCounters> {
        let mut groups: FxHashMap<GroupName, GroupCounters> = profile
            .groups
            .iter()
            .map(|name| (name.clone(), GroupCounters::default()))
            .collect();

        for fact in facts.all_facts() {
            let Some(entry) = dictionary.get(&fact.oil, fact.zone) else {
                continue;
            };
            if entry.group.is_empty() {
                continue;
            }
            let group = GroupName::from(entry.group.as_str());
            match groups.get_mut(&group) {
                Some(counters) => counters.record(fact),
                None => {
                    debug!(oil = %fact.oil, group = %group, "fact references an undeclared group");
                }
            }
        }

        groups
    }
}
