//! The `(oil, zone)` interpretation dictionary.
//!
//! Loaded fresh each run from the dictionary snapshot; the sheet is the
//! source of truth and staleness across runs is acceptable.

use aroma_core::types::collections::FxHashMap;
use aroma_core::types::{OilId, Zone};

use crate::source::DictionaryRecord;

use super::expansion::{self, ComboIndex};

/// Interpretation of one oil in one zone.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub psycho_emotional: String,
    pub somatic: String,
    /// Raw group cell. May name an undeclared group; aggregation decides.
    pub group: String,
    /// Raw combinations field, as authored.
    pub combinations: String,
    /// Note shown when this oil is the only one of its group in a zone.
    pub single_note: String,
    /// Parsed `[n]` descriptions from `combinations`.
    pub combos: ComboIndex,
}

impl DictionaryEntry {
    /// Psycho-emotional text with `[n]` references expanded.
    pub fn expanded_psycho_emotional(&self) -> String {
        expansion::expand_references(&self.psycho_emotional, &self.combos)
    }

    /// Somatic text with `[n]` references expanded.
    pub fn expanded_somatic(&self) -> String {
        expansion::expand_references(&self.somatic, &self.combos)
    }
}

/// Pure lookup table keyed `"{oil}|{zone}"`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLookup {
    entries: FxHashMap<String, DictionaryEntry>,
}

impl DictionaryLookup {
    /// Build the table from a dictionary snapshot. A duplicate `(oil, zone)`
    /// key overwrites the earlier row: last one wins, no error.
    pub fn load(records: &[DictionaryRecord]) -> Self {
        let mut entries = FxHashMap::default();
        for record in records {
            let oil = record.oil.trim();
            if oil.is_empty() {
                continue;
            }
            let combos = expansion::parse_markers(&record.combinations);
            entries.insert(
                Self::key_for(oil, record.zone),
                DictionaryEntry {
                    psycho_emotional: record.psycho_emotional.clone(),
                    somatic: record.somatic.clone(),
                    group: record.group.trim().to_string(),
                    combinations: record.combinations.clone(),
                    single_note: record.single_note.clone(),
                    combos,
                },
            );
        }
        Self { entries }
    }

    pub fn get(&self, oil: &OilId, zone: Zone) -> Option<&DictionaryEntry> {
        self.entries.get(&Self::key_for(oil.as_str(), zone))
    }

    /// The composite key used for lookups and key-not-found diagnostics.
    pub fn key_for(oil: &str, zone: Zone) -> String {
        format!("{oil}|{zone}")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
