//! The per-oil fact index.
//!
//! Rebuilt in full on every analysis run; never updated incrementally.
//! Iteration order is deterministic: facts keep input row order, oils keep
//! first-appearance order.

use aroma_core::types::collections::FxHashMap;
use aroma_core::types::{Fact, OilId};

/// Owned mapping `oil -> ordered facts`, plus first-appearance key order.
#[derive(Debug, Clone, Default)]
pub struct FactIndex {
    facts: Vec<Fact>,
    by_oil: FxHashMap<OilId, Vec<usize>>,
    order: Vec<OilId>,
}

impl FactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact, registering its oil on first appearance.
    pub fn insert(&mut self, fact: Fact) {
        let slot = self.facts.len();
        match self.by_oil.get_mut(&fact.oil) {
            Some(slots) => slots.push(slot),
            None => {
                self.order.push(fact.oil.clone());
                self.by_oil.insert(fact.oil.clone(), vec![slot]);
            }
        }
        self.facts.push(fact);
    }

    /// Oils in first-appearance order.
    pub fn oils(&self) -> impl Iterator<Item = &OilId> {
        self.order.iter()
    }

    /// Facts for one oil, in input row order. Empty for unknown oils.
    pub fn facts_for<'a>(&'a self, oil: &OilId) -> impl Iterator<Item = &'a Fact> {
        self.by_oil
            .get(oil)
            .map(|slots| slots.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&slot| &self.facts[slot])
    }

    /// All facts in input row order.
    pub fn all_facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// Mutable view over all facts, in input row order. Used by rank
    /// revalidation only.
    pub(crate) fn all_facts_mut(&mut self) -> impl Iterator<Item = &mut Fact> {
        self.facts.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
