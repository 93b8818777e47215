//! The skew analyzer and its builtin rule table.
//!
//! One pass over the fixed predicate list per group; predicates are not
//! mutually exclusive and are never re-evaluated iteratively.

use aroma_core::types::{GroupName, Zone};

use crate::groups::GroupCounters;

use super::types::{SkewRule, SkewText};

/// Applies per-group threshold rules to zone counters.
pub struct SkewAnalyzer {
    rules: Vec<SkewRule>,
}

impl SkewAnalyzer {
    /// Analyzer with the builtin production rule table.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Analyzer with a custom rule table, in declaration order.
    pub fn new(rules: Vec<SkewRule>) -> Self {
        Self { rules }
    }

    /// Evaluate every rule declared for `group` against its counters.
    ///
    /// Fragments of all firing rules concatenate space-joined in declaration
    /// order. A group with no firing rule yields empty texts.
    pub fn analyze(&self, group: &GroupName, counters: &GroupCounters) -> SkewText {
        let mut psycho_emotional: Vec<&str> = Vec::new();
        let mut somatic: Vec<&str> = Vec::new();

        for rule in self.rules.iter().filter(|r| &r.group == group) {
            if (rule.check)(counters) {
                if !rule.psycho_emotional.is_empty() {
                    psycho_emotional.push(rule.psycho_emotional);
                }
                if !rule.somatic.is_empty() {
                    somatic.push(rule.somatic);
                }
            }
        }

        SkewText {
            psycho_emotional: psycho_emotional.join(" "),
            somatic: somatic.join(" "),
        }
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for SkewAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The production skew table. Thresholds are distinct per group and baked in.
fn builtin_rules() -> Vec<SkewRule> {
    vec![
        SkewRule {
            id: "citrus_positive",
            group: GroupName::from("Citrus"),
            check: Box::new(|c| c.positive() >= 5),
            psycho_emotional: "Dependence on the opinion of others.",
            somatic: "Oxidative stress.",
        },
        SkewRule {
            id: "citrus_negative",
            group: GroupName::from("Citrus"),
            check: Box::new(|c| c.negative() >= 5),
            psycho_emotional: "Relies only on their own opinion, dismissing the views of others.",
            somatic: "Chronic congestive process. Hormonal imbalance is possible.",
        },
        SkewRule {
            id: "coniferous_saturated",
            group: GroupName::from("Coniferous"),
            check: Box::new(|c| c.positive() + c.count(Zone::Zero) == 5),
            psycho_emotional: "State of panic, hyperstress; the person hides their head in the sand.",
            somatic: "",
        },
        SkewRule {
            id: "coniferous_negative",
            group: GroupName::from("Coniferous"),
            check: Box::new(|c| c.negative() >= 5),
            psycho_emotional: "Indifference; does not sense danger.",
            somatic: "",
        },
        SkewRule {
            id: "coniferous_minus",
            group: GroupName::from("Coniferous"),
            check: Box::new(|c| c.count(Zone::Minus) > 0),
            psycho_emotional: "",
            somatic: "Acute inflammatory process (check the primary somatic findings).",
        },
        SkewRule {
            id: "spice_positive",
            group: GroupName::from("Spice"),
            check: Box::new(|c| c.positive() == 5),
            psycho_emotional: "A need for recognition, warmth and care.",
            somatic: "",
        },
        SkewRule {
            id: "spice_negative",
            group: GroupName::from("Spice"),
            check: Box::new(|c| c.negative() >= 4),
            psycho_emotional: "",
            somatic: "Chronic disorders of the digestive and endocrine systems.",
        },
        SkewRule {
            id: "floral_neutral",
            group: GroupName::from("Floral"),
            check: Box::new(|c| c.count(Zone::Neutral) > 3),
            psycho_emotional: "Femininity accepted as a given, without tension.",
            somatic: "",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aroma_core::types::{Fact, RowRef, Zone};

    fn counters(zones: &[Zone]) -> GroupCounters {
        let mut counters = GroupCounters::default();
        for (row, zone) in zones.iter().enumerate() {
            counters.record(&Fact::new(
                format!("Oil{row}"),
                *zone,
                None,
                RowRef(row as u32 + 2),
            ));
        }
        counters
    }

    #[test]
    fn citrus_positive_skew_fires_both_halves() {
        let analyzer = SkewAnalyzer::builtin();
        let counters = counters(&[
            Zone::TriplePlus,
            Zone::TriplePlus,
            Zone::Plus,
            Zone::Plus,
            Zone::Plus,
        ]);

        let text = analyzer.analyze(&GroupName::from("Citrus"), &counters);
        assert_eq!(text.psycho_emotional, "Dependence on the opinion of others.");
        assert_eq!(text.somatic, "Oxidative stress.");
    }

    #[test]
    fn below_threshold_yields_empty_text() {
        let analyzer = SkewAnalyzer::builtin();
        let counters = counters(&[Zone::TriplePlus, Zone::Plus]);

        let text = analyzer.analyze(&GroupName::from("Citrus"), &counters);
        assert!(text.is_empty());
    }

    #[test]
    fn multiple_predicates_concatenate_in_declaration_order() {
        let analyzer = SkewAnalyzer::builtin();
        // Five negative + one minus-zone fact: coniferous_negative and
        // coniferous_minus both fire.
        let counters = counters(&[
            Zone::TripleMinus,
            Zone::TripleMinus,
            Zone::TripleMinus,
            Zone::TripleMinus,
            Zone::Minus,
        ]);

        let text = analyzer.analyze(&GroupName::from("Coniferous"), &counters);
        assert_eq!(text.psycho_emotional, "Indifference; does not sense danger.");
        assert_eq!(
            text.somatic,
            "Acute inflammatory process (check the primary somatic findings)."
        );
    }

    #[test]
    fn spice_positive_is_exact_count_not_threshold() {
        let analyzer = SkewAnalyzer::builtin();
        let group = GroupName::from("Spice");

        let five = counters(&[Zone::TriplePlus; 5]);
        assert!(!analyzer.analyze(&group, &five).psycho_emotional.is_empty());

        let six = counters(&[Zone::TriplePlus; 6]);
        assert!(analyzer.analyze(&group, &six).psycho_emotional.is_empty());
    }

    #[test]
    fn woody_herbal_has_no_rules() {
        let analyzer = SkewAnalyzer::builtin();
        let counters = counters(&[Zone::TripleMinus; 7]);

        let text = analyzer.analyze(&GroupName::from("Woody-Herbal"), &counters);
        assert!(text.is_empty());
    }
}
