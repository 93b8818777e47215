//! Rule evaluation over the fact index.
//!
//! Evaluation order is deterministic: main oils in first-appearance order of
//! the input, rules in declaration order within a main oil. The final sort is
//! stable, so equal priorities keep that order.

use tracing::debug;

use aroma_core::types::collections::FxHashSet;
use aroma_core::types::{Fact, OilId};

use crate::facts::FactIndex;
use crate::rules::{Quantifier, Rule, RuleBase};

use super::types::Finding;

/// Evaluates every applicable rule against a fact index.
pub struct CombinationEngine;

impl CombinationEngine {
    /// Evaluate all rules whose main oil is present in `facts`.
    ///
    /// Never fails: an oil without rules and a rule that never fires are
    /// silent no-ops.
    pub fn evaluate<'r>(facts: &FactIndex, rules: &'r RuleBase) -> Vec<Finding<'r>> {
        let mut findings = Vec::new();

        for main_oil in facts.oils() {
            let Some(rule_list) = rules.rules_for(main_oil) else {
                debug!(oil = %main_oil, "no combination rules declared");
                continue;
            };
            for rule in rule_list {
                let matched = Self::collect_matches(facts, rule);
                if Self::fires(rule, &matched) {
                    let priority = Self::priority(rule, &matched);
                    findings.push(Finding {
                        main_oil: main_oil.clone(),
                        rule,
                        matched_facts: matched,
                        priority,
                    });
                }
            }
        }

        findings.sort_by(|a, b| b.priority.cmp(&a.priority));
        findings
    }

    /// Every fact of a companion oil in an accepted zone. The main oil's own
    /// facts never count as companions of its own rule.
    fn collect_matches(facts: &FactIndex, rule: &Rule) -> Vec<Fact> {
        let mut matched = Vec::new();
        for companion in &rule.companions {
            if companion == &rule.main_oil {
                continue;
            }
            for fact in facts.facts_for(companion) {
                if rule.accepts_zone(fact.zone) {
                    matched.push(fact.clone());
                }
            }
        }
        matched
    }

    /// Apply the rule's quantifier to the matched facts.
    ///
    /// ALL compares distinct matched oils against the companion set: one oil
    /// in several accepted zones still counts once.
    fn fires(rule: &Rule, matched: &[Fact]) -> bool {
        match rule.quantifier {
            Quantifier::Any => !matched.is_empty(),
            Quantifier::All => {
                let distinct: FxHashSet<&OilId> = matched.iter().map(|f| &f.oil).collect();
                distinct.len() == rule.companions.len()
            }
        }
    }

    /// Priority of a fired rule:
    /// rule number, plus the zone weight of every matched fact, plus 50 per
    /// ranked matched fact, plus 10 per matched fact.
    fn priority(rule: &Rule, matched: &[Fact]) -> u32 {
        let mut priority = rule.number;
        for fact in matched {
            priority += fact.zone.score();
            if fact.rank.is_some() {
                priority += 50;
            }
        }
        priority + 10 * matched.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aroma_core::types::{Rank, RowRef, Zone};

    fn index(facts: &[(&str, Zone, Option<&str>)]) -> FactIndex {
        let mut index = FactIndex::new();
        for (row, (oil, zone, rank)) in facts.iter().enumerate() {
            index.insert(Fact::new(
                *oil,
                *zone,
                rank.and_then(Rank::parse_token),
                RowRef(row as u32 + 2),
            ));
        }
        index
    }

    fn base(toml: &str) -> RuleBase {
        RuleBase::load_from_str(toml).unwrap()
    }

    #[test]
    fn any_rule_fires_on_single_companion_fact() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilA"
companions = ["OilB"]
zones = ["+++", "+"]
quantifier = "any"
results = ["r"]
"#,
        );
        let facts = index(&[("OilA", Zone::TriplePlus, Some("1")), ("OilB", Zone::TriplePlus, None)]);

        let findings = CombinationEngine::evaluate(&facts, &rules);
        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.matched_facts.len(), 1);
        assert_eq!(finding.matched_facts[0].oil, OilId::from("OilB"));
        // base 0 + zone 100 + no rank + 10 per matched fact
        assert_eq!(finding.priority, 110);
    }

    #[test]
    fn all_rule_needs_every_companion() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilM"
companions = ["OilX", "OilY"]
zones = ["-"]
results = ["r"]
"#,
        );

        // OilX alone would satisfy an ANY rule, but not ALL.
        let partial = index(&[("OilM", Zone::Plus, None), ("OilX", Zone::Minus, None)]);
        assert!(CombinationEngine::evaluate(&partial, &rules).is_empty());

        let complete = index(&[
            ("OilM", Zone::Plus, None),
            ("OilX", Zone::Minus, None),
            ("OilY", Zone::Minus, None),
        ]);
        assert_eq!(CombinationEngine::evaluate(&complete, &rules).len(), 1);
    }

    #[test]
    fn all_rule_ignores_unrelated_facts() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilM"
companions = ["OilX", "OilY"]
zones = ["-"]
results = ["r"]
"#,
        );
        let facts = index(&[
            ("OilM", Zone::Plus, None),
            ("OilX", Zone::Minus, None),
            ("OilY", Zone::Minus, None),
            ("OilZ", Zone::TriplePlus, Some("1")),
        ]);

        let findings = CombinationEngine::evaluate(&facts, &rules);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].matched_facts.len(), 2);
    }

    #[test]
    fn one_oil_in_two_zones_counts_once_for_all() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilM"
companions = ["OilX", "OilY"]
zones = ["+++", "+"]
results = ["r"]
"#,
        );
        // OilX appears twice in accepted zones; OilY is absent, so ALL must
        // not fire despite two matched facts.
        let facts = index(&[
            ("OilM", Zone::Plus, None),
            ("OilX", Zone::TriplePlus, None),
            ("OilX", Zone::Plus, None),
        ]);

        assert!(CombinationEngine::evaluate(&facts, &rules).is_empty());
    }

    #[test]
    fn main_oil_is_never_its_own_companion() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilA"
companions = ["OilA"]
zones = ["+++"]
quantifier = "any"
results = ["r"]
"#,
        );
        let facts = index(&[("OilA", Zone::TriplePlus, None)]);

        assert!(CombinationEngine::evaluate(&facts, &rules).is_empty());
    }

    #[test]
    fn ranked_companion_adds_fifty() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilA"
companions = ["OilB"]
zones = ["+++"]
number = 2
quantifier = "any"
results = ["r"]
"#,
        );
        let facts = index(&[("OilA", Zone::Plus, None), ("OilB", Zone::TriplePlus, Some("3"))]);

        let findings = CombinationEngine::evaluate(&facts, &rules);
        // base 2 + zone 100 + rank 50 + count 10
        assert_eq!(findings[0].priority, 162);
    }

    #[test]
    fn findings_sorted_descending_with_stable_ties() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilA"
companions = ["OilB"]
zones = ["+"]
number = 1
quantifier = "any"
results = ["low, declared first"]

[[rules]]
main_oil = "OilA"
companions = ["OilC"]
zones = ["+++"]
number = 1
quantifier = "any"
results = ["high"]

[[rules]]
main_oil = "OilA"
companions = ["OilD"]
zones = ["+"]
number = 1
quantifier = "any"
results = ["low, declared second"]
"#,
        );
        let facts = index(&[
            ("OilA", Zone::Neutral, None),
            ("OilB", Zone::Plus, None),
            ("OilC", Zone::TriplePlus, None),
            ("OilD", Zone::Plus, None),
        ]);

        let findings = CombinationEngine::evaluate(&facts, &rules);
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].priority, 111);
        assert_eq!(findings[1].priority, 71);
        assert_eq!(findings[2].priority, 71);
        // Equal priorities keep rule declaration order.
        assert_eq!(findings[1].rule.results[0], "low, declared first");
        assert_eq!(findings[2].rule.results[0], "low, declared second");
    }

    #[test]
    fn oil_without_rules_is_a_silent_noop() {
        let rules = base(
            r#"
[[rules]]
main_oil = "OilA"
companions = ["OilB"]
zones = ["+++"]
results = ["r"]
"#,
        );
        let facts = index(&[("Stranger", Zone::TriplePlus, None)]);

        assert!(CombinationEngine::evaluate(&facts, &rules).is_empty());
    }
}
