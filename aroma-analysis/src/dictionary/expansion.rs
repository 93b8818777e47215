//! Parsing and inline expansion of bracketed combination markers.
//!
//! Dictionary combination fields read `[1] first description [2] second…`.
//! Interpretation texts may back-reference them ("See combination [2].").
//! Expansion replaces the reference phrase with the descriptions themselves.
//! This is string enrichment only; it never feeds back into facts or
//! findings.

use once_cell::sync::Lazy;
use regex::Regex;

use aroma_core::types::collections::FxHashMap;

/// `[n]` followed by a description running to the next marker or end.
static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\d+)\]\s*([^\[]+)").unwrap());

/// A bare `[n]` back-reference inside interpretation text.
static REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// The referencing phrase itself, stripped after expansion.
static SEE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)see\s+combinations?[^.]*\.?").unwrap());

static MULTI_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Parsed combination descriptions of one dictionary entry, keyed by marker
/// number, with marker order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboIndex {
    by_number: FxHashMap<u32, String>,
    order: Vec<u32>,
}

impl ComboIndex {
    pub fn get(&self, number: u32) -> Option<&str> {
        self.by_number.get(&number).map(String::as_str)
    }

    /// Marker numbers in the order they appear in the source text.
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

/// Segment a combinations field into `number -> description`.
///
/// Descriptions are whitespace-normalized and terminated with a period. A
/// repeated marker number overwrites the earlier description (last one wins,
/// like the dictionary rows themselves).
pub fn parse_markers(text: &str) -> ComboIndex {
    let mut index = ComboIndex::default();
    for caps in MARKER_RE.captures_iter(text) {
        let Ok(number) = caps[1].parse::<u32>() else {
            continue;
        };
        let description = MULTI_WS_RE.replace_all(caps[2].trim(), " ").into_owned();
        if description.is_empty() {
            continue;
        }
        let description = if description.ends_with('.') {
            description
        } else {
            format!("{description}.")
        };
        if index.by_number.insert(number, description).is_none() {
            index.order.push(number);
        }
    }
    index
}

/// Expand `[n]` back-references in interpretation text.
///
/// Referenced descriptions are appended in first-reference order; the "See
/// combination…" phrase is removed; whitespace is collapsed. Unknown numbers
/// expand to nothing.
pub fn expand_references(text: &str, combos: &ComboIndex) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut referenced: Vec<u32> = Vec::new();
    for caps in REF_RE.captures_iter(text) {
        if let Ok(number) = caps[1].parse::<u32>() {
            if !referenced.contains(&number) {
                referenced.push(number);
            }
        }
    }

    let cleaned = SEE_RE.replace_all(text, "");
    let cleaned = REF_RE.replace_all(&cleaned, "");
    let mut cleaned = MULTI_WS_RE.replace_all(cleaned.trim(), " ").into_owned();

    if referenced.is_empty() || combos.is_empty() {
        return cleaned;
    }

    let additions: Vec<&str> = referenced
        .into_iter()
        .filter_map(|n| combos.get(n))
        .collect();
    if !additions.is_empty() {
        let extra = additions.join(" ");
        if cleaned.is_empty() {
            cleaned = extra;
        } else {
            cleaned = format!("{cleaned} {extra}");
        }
    }
    cleaned.trim().to_string()
}
