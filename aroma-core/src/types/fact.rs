//! Facts and the identifiers they are made of.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::zone::Zone;

/// Name of an essential oil, as it appears in the input and the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OilId(pub String);

impl OilId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OilId {
    fn from(name: &str) -> Self {
        OilId(name.to_string())
    }
}

impl From<String> for OilId {
    fn from(name: String) -> Self {
        OilId(name)
    }
}

impl fmt::Display for OilId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of an oil group used for aggregate skew analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(pub String);

impl GroupName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupName {
    fn from(name: &str) -> Self {
        GroupName(name.to_string())
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional 1-3 ordinal distinguishing priority among `+++`-zone oils.
///
/// Captured for every zone, validated for uniqueness only when the zone
/// is `+++`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(u8);

impl Rank {
    /// Parse a rank cell. Only the exact tokens `"1"`, `"2"`, `"3"` are valid.
    pub fn parse_token(token: &str) -> Option<Rank> {
        match token {
            "1" => Some(Rank(1)),
            "2" => Some(Rank(2)),
            "3" => Some(Rank(3)),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based reference to the source row a fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRef(pub u32);

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One (oil, zone) observation from the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub oil: OilId,
    pub zone: Zone,
    pub rank: Option<Rank>,
    pub source_row: RowRef,
}

impl Fact {
    pub fn new(oil: impl Into<OilId>, zone: Zone, rank: Option<Rank>, source_row: RowRef) -> Self {
        Self {
            oil: oil.into(),
            zone,
            rank,
            source_row,
        }
    }

    /// Display label used in group lists and finding summaries:
    /// `"Orange (+++, rank 1)"` or `"Orange (+++)"`.
    pub fn label(&self) -> String {
        match self.rank {
            Some(rank) => format!("{} ({}, rank {})", self.oil, self.zone, rank),
            None => format!("{} ({})", self.oil, self.zone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_accepts_only_exact_tokens() {
        assert_eq!(Rank::parse_token("1").map(|r| r.value()), Some(1));
        assert_eq!(Rank::parse_token("3").map(|r| r.value()), Some(3));
        assert_eq!(Rank::parse_token("4"), None);
        assert_eq!(Rank::parse_token("01"), None);
        assert_eq!(Rank::parse_token(" 1"), None);
        assert_eq!(Rank::parse_token(""), None);
    }

    #[test]
    fn fact_label_includes_rank_when_present() {
        let ranked = Fact::new("Orange", Zone::TriplePlus, Rank::parse_token("1"), RowRef(2));
        assert_eq!(ranked.label(), "Orange (+++, rank 1)");

        let unranked = Fact::new("Lemon", Zone::Minus, None, RowRef(3));
        assert_eq!(unranked.label(), "Lemon (-)");
    }
}
