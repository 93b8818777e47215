//! Rule types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use aroma_core::types::{OilId, Zone};

/// How many companion oils a rule needs to fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// Every companion oil must appear in an accepted zone. The default.
    #[default]
    All,
    /// Any single companion fact in an accepted zone suffices.
    Any,
}

/// One compiled combination rule.
///
/// Static and immutable once the table is loaded. Companion order is kept
/// for display; matching treats companions as a set.
#[derive(Debug, Clone)]
pub struct Rule {
    pub main_oil: OilId,
    pub companions: Vec<OilId>,
    pub zones: SmallVec<[Zone; 4]>,
    pub quantifier: Quantifier,
    /// Display ordinal from the source methodology; 0 when untracked.
    /// Feeds the base term of a finding's priority.
    pub number: u32,
    /// Result texts, each independently meaningful.
    pub results: Vec<String>,
}

impl Rule {
    /// Whether `zone` is one of the accepted zones.
    pub fn accepts_zone(&self, zone: Zone) -> bool {
        self.zones.contains(&zone)
    }

    /// Whether `oil` is one of the companion oils.
    pub fn has_companion(&self, oil: &OilId) -> bool {
        self.companions.contains(oil)
    }
}
