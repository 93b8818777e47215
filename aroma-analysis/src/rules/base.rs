//! Declarative TOML rule definitions and the compiled rule base.
//!
//! The rule table is data, not code: the builtin set ships as an embedded
//! TOML document, so the table can grow without touching engine logic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use aroma_core::errors::RuleError;
use aroma_core::types::collections::FxHashMap;
use aroma_core::types::{OilId, Zone};

use super::types::{Quantifier, Rule};

/// The builtin combination rule table.
const BUILTIN_RULES: &str = include_str!("combinations.toml");

/// A TOML-defined rule, before compilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    pub main_oil: String,
    pub companions: Vec<String>,
    pub zones: Vec<String>,
    #[serde(default)]
    pub quantifier: Quantifier,
    #[serde(default)]
    pub number: u32,
    pub results: Vec<String>,
}

/// A collection of TOML rule definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// The compiled rule table: `main oil -> rules in declaration order`.
#[derive(Debug, Clone, Default)]
pub struct RuleBase {
    by_oil: FxHashMap<OilId, Vec<Rule>>,
    rule_count: usize,
}

impl RuleBase {
    /// Compile the builtin table.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::load_from_str(BUILTIN_RULES)
    }

    /// Compile a rule table from a TOML string.
    pub fn load_from_str(toml_str: &str) -> Result<Self, RuleError> {
        let file: RuleFile =
            toml::from_str(toml_str).map_err(|e| RuleError::Parse(e.to_string()))?;

        let mut base = RuleBase::default();
        for def in file.rules {
            base.push(Self::compile(def)?);
        }
        Ok(base)
    }

    /// Compile a single rule definition.
    fn compile(def: RuleDef) -> Result<Rule, RuleError> {
        if def.companions.is_empty() {
            return Err(RuleError::NoCompanions {
                main_oil: def.main_oil,
            });
        }
        if def.results.is_empty() {
            return Err(RuleError::NoResults {
                main_oil: def.main_oil,
            });
        }

        let mut companions: Vec<OilId> = Vec::with_capacity(def.companions.len());
        for name in &def.companions {
            let oil = OilId::from(name.as_str());
            if companions.contains(&oil) {
                return Err(RuleError::DuplicateCompanion {
                    main_oil: def.main_oil,
                    companion: name.clone(),
                });
            }
            companions.push(oil);
        }

        let mut zones: SmallVec<[Zone; 4]> = SmallVec::new();
        for token in &def.zones {
            let zone = Zone::parse_str(token).ok_or_else(|| RuleError::UnknownZone {
                main_oil: def.main_oil.clone(),
                zone: token.clone(),
            })?;
            if !zones.contains(&zone) {
                zones.push(zone);
            }
        }

        Ok(Rule {
            main_oil: OilId::from(def.main_oil.as_str()),
            companions,
            zones,
            quantifier: def.quantifier,
            number: def.number,
            results: def.results,
        })
    }

    fn push(&mut self, rule: Rule) {
        self.rule_count += 1;
        self.by_oil
            .entry(rule.main_oil.clone())
            .or_default()
            .push(rule);
    }

    /// Rules declared for `oil`, in declaration order. `None` when the oil
    /// has no rules, which the engine treats as a silent no-op.
    pub fn rules_for(&self, oil: &OilId) -> Option<&[Rule]> {
        self.by_oil.get(oil).map(Vec::as_slice)
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Number of distinct main oils with at least one rule.
    pub fn main_oil_count(&self) -> usize {
        self.by_oil.len()
    }
}
