//! Zone counters for one oil group.

use serde::Serialize;

use aroma_core::types::{Fact, OilId, Zone};

/// Per-zone counts and display labels for one group, filled during a single
/// aggregation pass and reset with it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupCounters {
    counts: [u32; Zone::COUNT],
    /// Display labels in fact-processing order, e.g. `"Orange (+++, rank 1)"`.
    pub labels: Vec<String>,
    oils_by_zone: [Vec<OilId>; Zone::COUNT],
}

impl GroupCounters {
    /// Record one fact of this group.
    pub fn record(&mut self, fact: &Fact) {
        self.counts[fact.zone.index()] += 1;
        self.oils_by_zone[fact.zone.index()].push(fact.oil.clone());
        self.labels.push(fact.label());
    }

    /// Count of facts in `zone`.
    pub fn count(&self, zone: Zone) -> u32 {
        self.counts[zone.index()]
    }

    /// Oils recorded in `zone`, in fact-processing order.
    pub fn oils_in(&self, zone: Zone) -> &[OilId] {
        &self.oils_by_zone[zone.index()]
    }

    /// `+++` plus `+`.
    pub fn positive(&self) -> u32 {
        self.count(Zone::TriplePlus) + self.count(Zone::Plus)
    }

    /// `---` plus `-`.
    pub fn negative(&self) -> u32 {
        self.count(Zone::TripleMinus) + self.count(Zone::Minus)
    }

    /// Total facts recorded for this group.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aroma_core::types::{Rank, RowRef};

    #[test]
    fn records_counts_labels_and_oils() {
        let mut counters = GroupCounters::default();
        counters.record(&Fact::new(
            "Orange",
            Zone::TriplePlus,
            Rank::parse_token("1"),
            RowRef(2),
        ));
        counters.record(&Fact::new("Lemon", Zone::Plus, None, RowRef(3)));

        assert_eq!(counters.count(Zone::TriplePlus), 1);
        assert_eq!(counters.count(Zone::Plus), 1);
        assert_eq!(counters.count(Zone::Minus), 0);
        assert_eq!(counters.positive(), 2);
        assert_eq!(counters.negative(), 0);
        assert_eq!(counters.total(), 2);
        assert_eq!(counters.labels, vec!["Orange (+++, rank 1)", "Lemon (+)"]);
        assert_eq!(counters.oils_in(Zone::Plus), &[OilId::from("Lemon")]);
    }
}
