//! The tabular source seam.
//!
//! The engine never reads spreadsheets, files or networks itself: it consumes
//! a [`TabularSource`], which hands over the full input and dictionary
//! snapshots at the start of a run. Failure to produce either snapshot is the
//! only fatal condition in an analysis run.

use serde::{Deserialize, Serialize};

use aroma_core::errors::SourceError;
use aroma_core::types::{RowRef, Zone};

/// One logical input row: an oil placed in a zone, optionally ranked.
///
/// The rank is kept as the raw cell text; it is validated at ingestion, not
/// here. Interpretation and diagnostic columns are outputs the core produces,
/// never inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub row: RowRef,
    pub request_label: Option<String>,
    pub oil: String,
    pub zone: Zone,
    pub rank: Option<String>,
}

impl InputRecord {
    pub fn new(row: RowRef, oil: impl Into<String>, zone: Zone) -> Self {
        Self {
            row,
            request_label: None,
            oil: oil.into(),
            zone,
            rank: None,
        }
    }

    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    pub fn with_request_label(mut self, label: impl Into<String>) -> Self {
        self.request_label = Some(label.into());
        self
    }
}

/// One dictionary row: the interpretation of an oil in a zone.
///
/// Rows the host could not parse into this shape (blank oil, unknown zone
/// token) are cell-level concerns and never reach the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRecord {
    pub oil: String,
    pub zone: Zone,
    pub psycho_emotional: String,
    pub somatic: String,
    pub group: String,
    pub combinations: String,
    pub single_note: String,
}

impl DictionaryRecord {
    pub fn new(oil: impl Into<String>, zone: Zone) -> Self {
        Self {
            oil: oil.into(),
            zone,
            psycho_emotional: String::new(),
            somatic: String::new(),
            group: String::new(),
            combinations: String::new(),
            single_note: String::new(),
        }
    }
}

/// The external tabular source an analysis run reads from.
///
/// Both methods return the complete snapshot: the engine never diffs
/// incrementally, it re-reads everything each run.
pub trait TabularSource {
    fn input_records(&self) -> Result<Vec<InputRecord>, SourceError>;
    fn dictionary_records(&self) -> Result<Vec<DictionaryRecord>, SourceError>;
}

/// In-memory source, used in tests and by embedding hosts that already hold
/// the rows.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    input: Vec<InputRecord>,
    dictionary: Vec<DictionaryRecord>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, record: InputRecord) -> &mut Self {
        self.input.push(record);
        self
    }

    pub fn push_dictionary(&mut self, record: DictionaryRecord) -> &mut Self {
        self.dictionary.push(record);
        self
    }
}

impl TabularSource for MemorySource {
    fn input_records(&self) -> Result<Vec<InputRecord>, SourceError> {
        Ok(self.input.clone())
    }

    fn dictionary_records(&self) -> Result<Vec<DictionaryRecord>, SourceError> {
        Ok(self.dictionary.clone())
    }
}
