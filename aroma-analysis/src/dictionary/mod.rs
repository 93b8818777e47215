//! Dictionary lookup and combination-text expansion.

pub mod expansion;
pub mod lookup;

pub use expansion::{expand_references, parse_markers, ComboIndex};
pub use lookup::{DictionaryEntry, DictionaryLookup};
