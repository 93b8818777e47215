//! The single-pass analysis runner.
//!
//! One invocation reads the full input snapshot, runs every stage to
//! completion and returns the assembled report. Nothing is cached across
//! runs; re-running on unchanged input yields identical output.

use tracing::debug;

use aroma_core::config::AnalysisProfile;
use aroma_core::errors::AnalysisError;
use aroma_core::types::collections::FxHashMap;
use aroma_core::types::{Fact, OilId, RowRef, Zone};

use crate::combinations::CombinationEngine;
use crate::dictionary::{DictionaryEntry, DictionaryLookup};
use crate::facts::{ingest, FactIndex, Ingestion};
use crate::groups::GroupAggregator;
use crate::rules::RuleBase;
use crate::skew::SkewAnalyzer;
use crate::source::{InputRecord, TabularSource};

use super::types::{
    AnalysisReport, CombinationFinding, GroupReport, Recommendation, RecommendationPriority,
    RowOutcome, ZoneTasks,
};

/// Marker a dictionary author puts on texts worth surfacing as a motif.
const MOTIF_MARKER: &str = "*KEY";

const DEFAULT_REQUEST_LABEL: &str = "General request";

/// Fixed `---`-zone motifs from the methodology.
fn triple_minus_motif(oil: &OilId) -> Option<&'static str> {
    match oil.as_str() {
        "Orange" => Some("A prohibition on joy; deep depression."),
        "Bergamot" => Some("Deep depression; stuck in adolescence."),
        "Lemon" => Some("High irritability, aggression."),
        _ => None,
    }
}

/// The analysis coordinator: profile, rule base and skew table are fixed at
/// construction, each `run` processes one input snapshot.
pub struct Analyzer {
    profile: AnalysisProfile,
    rules: RuleBase,
    skews: SkewAnalyzer,
}

impl Analyzer {
    /// Build an analyzer from explicit parts. The profile is validated here
    /// so the run itself never fails on configuration.
    pub fn new(
        profile: AnalysisProfile,
        rules: RuleBase,
        skews: SkewAnalyzer,
    ) -> Result<Self, AnalysisError> {
        profile.validate()?;
        Ok(Self {
            profile,
            rules,
            skews,
        })
    }

    /// Analyzer with the compiled-in production tables.
    pub fn with_defaults() -> Result<Self, AnalysisError> {
        Self::new(
            AnalysisProfile::default(),
            RuleBase::builtin()?,
            SkewAnalyzer::builtin(),
        )
    }

    /// Run one full analysis pass over the source snapshot.
    ///
    /// The only fatal failures are the two snapshot reads; every data-level
    /// problem becomes a diagnostic inside the report.
    pub fn run(&self, source: &dyn TabularSource) -> Result<AnalysisReport, AnalysisError> {
        let input = source.input_records()?;
        let dictionary_rows = source.dictionary_records()?;
        let dictionary = DictionaryLookup::load(&dictionary_rows);
        debug!(
            input_rows = input.len(),
            dictionary_entries = dictionary.len(),
            "snapshot read"
        );

        let Ingestion { index, issues } = ingest(&input, &self.profile);

        let mut issues_by_row: FxHashMap<RowRef, Vec<String>> = FxHashMap::default();
        for issue in &issues {
            issues_by_row
                .entry(issue.row())
                .or_default()
                .push(issue.to_string());
        }

        let facts_by_row: FxHashMap<RowRef, &Fact> = index
            .all_facts()
            .map(|fact| (fact.source_row, fact))
            .collect();

        let rows = self.row_outcomes(&input, &dictionary, &issues_by_row, &facts_by_row);
        let groups = self.group_reports(&index, &dictionary);
        let single_oils = self.single_oil_notices(&groups, &index, &dictionary);
        let findings = self.findings(&index);
        let (zone_tasks, motifs) = self.zone_tasks_and_motifs(&index, &dictionary);
        let recommendations = self.recommendations(&findings, &single_oils, &zone_tasks);

        Ok(AnalysisReport {
            request_label: input
                .iter()
                .find_map(|record| {
                    record
                        .request_label
                        .as_deref()
                        .map(str::trim)
                        .filter(|label| !label.is_empty())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| DEFAULT_REQUEST_LABEL.to_string()),
            rows,
            findings,
            groups,
            single_oils,
            zone_tasks,
            motifs,
            recommendations,
        })
    }

    fn row_outcomes(
        &self,
        input: &[InputRecord],
        dictionary: &DictionaryLookup,
        issues_by_row: &FxHashMap<RowRef, Vec<String>>,
        facts_by_row: &FxHashMap<RowRef, &Fact>,
    ) -> Vec<RowOutcome> {
        input
            .iter()
            .map(|record| {
                let mut diagnostics = issues_by_row.get(&record.row).cloned().unwrap_or_default();

                let oil_name = record.oil.trim();
                if oil_name.is_empty() {
                    return RowOutcome {
                        row: record.row,
                        oil: None,
                        zone: None,
                        rank: None,
                        psycho_emotional: String::new(),
                        somatic: String::new(),
                        diagnostics,
                    };
                }

                let oil = OilId::from(oil_name);
                let rank = facts_by_row.get(&record.row).and_then(|fact| fact.rank);
                let (psycho_emotional, somatic) = match dictionary.get(&oil, record.zone) {
                    Some(entry) => (
                        entry.expanded_psycho_emotional(),
                        entry.expanded_somatic(),
                    ),
                    None => {
                        diagnostics.push(format!(
                            "key not found: {}",
                            DictionaryLookup::key_for(oil.as_str(), record.zone)
                        ));
                        (String::new(), String::new())
                    }
                };

                RowOutcome {
                    row: record.row,
                    oil: Some(oil),
                    zone: Some(record.zone),
                    rank,
                    psycho_emotional,
                    somatic,
                    diagnostics,
                }
            })
            .collect()
    }

    fn group_reports(&self, index: &FactIndex, dictionary: &DictionaryLookup) -> Vec<GroupReport> {
        let mut counters = GroupAggregator::aggregate(index, dictionary, &self.profile);
        self.profile
            .groups
            .iter()
            .map(|group| {
                let counters = counters.remove(group).unwrap_or_default();
                let skew = self.skews.analyze(group, &counters);
                GroupReport {
                    group: group.clone(),
                    counters,
                    skew,
                }
            })
            .collect()
    }

    /// A zone holding exactly one oil of a group is worth a notice: the
    /// dictionary's single-oil note when present, a generic template
    /// otherwise.
    fn single_oil_notices(
        &self,
        groups: &[GroupReport],
        index: &FactIndex,
        dictionary: &DictionaryLookup,
    ) -> Vec<String> {
        let mut notices = Vec::new();
        for report in groups {
            for zone in Zone::ALL {
                if report.counters.count(zone) != 1 {
                    continue;
                }
                let oil = &report.counters.oils_in(zone)[0];
                let label = index
                    .facts_for(oil)
                    .find(|fact| fact.zone == zone)
                    .map(Fact::label)
                    .unwrap_or_else(|| format!("{oil} ({zone})"));
                let note = dictionary
                    .get(oil, zone)
                    .map(|entry| entry.single_note.trim())
                    .unwrap_or_default();
                if note.is_empty() {
                    notices.push(format!(
                        "{label} is the only oil in the {} group.",
                        report.group
                    ));
                } else {
                    notices.push(format!("{label}: {note}"));
                }
            }
        }
        notices
    }

    fn findings(&self, index: &FactIndex) -> Vec<CombinationFinding> {
        CombinationEngine::evaluate(index, &self.rules)
            .into_iter()
            .map(|finding| CombinationFinding {
                matched_labels: finding.matched_labels(),
                main_oil: finding.main_oil,
                number: finding.rule.number,
                matched: finding.matched_facts,
                results: finding.rule.results.clone(),
                priority: finding.priority,
            })
            .collect()
    }

    fn zone_tasks_and_motifs(
        &self,
        index: &FactIndex,
        dictionary: &DictionaryLookup,
    ) -> (ZoneTasks, Vec<String>) {
        let mut tasks = ZoneTasks::default();
        let mut motifs = Vec::new();

        for fact in index.all_facts() {
            let Some(entry) = dictionary.get(&fact.oil, fact.zone) else {
                continue;
            };
            let psycho_emotional = entry.expanded_psycho_emotional();
            let somatic = entry.expanded_somatic();

            match fact.zone {
                Zone::TriplePlus => {
                    let label = match fact.rank {
                        Some(rank) => format!("{} (rank {rank})", fact.oil),
                        None => fact.oil.to_string(),
                    };
                    tasks
                        .key_psycho_emotional
                        .push(format!("{label}: {psycho_emotional}"));
                    tasks.key_somatic.push(format!("{label}: {somatic}"));
                }
                Zone::TripleMinus => {
                    tasks
                        .resource_psycho_emotional
                        .push(format!("{}: {psycho_emotional}", fact.oil));
                    tasks.resource_somatic.push(format!("{}: {somatic}", fact.oil));
                }
                Zone::Plus => {
                    tasks
                        .plus_psycho_emotional
                        .push(format!("{}: {psycho_emotional}", fact.oil));
                    tasks.plus_somatic.push(format!("{}: {somatic}", fact.oil));
                }
                Zone::Minus => {
                    tasks
                        .minus_psycho_emotional
                        .push(format!("{}: {psycho_emotional}", fact.oil));
                    tasks.minus_somatic.push(format!("{}: {somatic}", fact.oil));
                }
                Zone::Neutral => tasks.neutral_count += 1,
                Zone::Zero => tasks.blocked.push(fact.oil.clone()),
                Zone::Reverse => tasks.reversed.push(fact.oil.clone()),
            }

            self.collect_motifs(fact, entry, &psycho_emotional, &somatic, &mut motifs);
        }

        tasks.neutral_interpretation = if tasks.neutral_count > self.profile.neutral_zone_threshold
        {
            format!(
                "Large neutral zone ({} oils): the situation is accepted as a given.",
                tasks.neutral_count
            )
        } else {
            format!(
                "Small neutral zone ({} oils): internal tension.",
                tasks.neutral_count
            )
        };

        (tasks, motifs)
    }

    fn collect_motifs(
        &self,
        fact: &Fact,
        entry: &DictionaryEntry,
        psycho_emotional: &str,
        somatic: &str,
        motifs: &mut Vec<String>,
    ) {
        if entry.psycho_emotional.contains(MOTIF_MARKER)
            || entry.somatic.contains(MOTIF_MARKER)
        {
            motifs.push(format!(
                "{} ({}): {} / {}",
                fact.oil,
                fact.zone,
                psycho_emotional.replace(MOTIF_MARKER, "").trim(),
                somatic.replace(MOTIF_MARKER, "").trim(),
            ));
        }
        if fact.zone == Zone::TripleMinus {
            if let Some(motif) = triple_minus_motif(&fact.oil) {
                motifs.push(motif.to_string());
            }
        }
    }

    fn recommendations(
        &self,
        findings: &[CombinationFinding],
        single_oils: &[String],
        tasks: &ZoneTasks,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if !tasks.key_psycho_emotional.is_empty() {
            recommendations.push(Recommendation {
                text: "Address the primary psycho-emotional problems (the +++ zone).".to_string(),
                priority: RecommendationPriority::High,
            });
        }
        if !findings.is_empty() {
            recommendations.push(Recommendation {
                text: format!(
                    "Account for the {} detected oil combinations in the therapeutic plan.",
                    findings.len()
                ),
                priority: RecommendationPriority::High,
            });
        }
        if !single_oils.is_empty() {
            recommendations.push(Recommendation {
                text: "Pay special attention to single oils within groups; they can point to \
                       specific needs."
                    .to_string(),
                priority: RecommendationPriority::Medium,
            });
        }
        if tasks.neutral_count <= self.profile.neutral_zone_threshold {
            recommendations.push(Recommendation {
                text: "Work on reducing internal tension (small neutral zone).".to_string(),
                priority: RecommendationPriority::Medium,
            });
        }
        if !tasks.plus_psycho_emotional.is_empty() || !tasks.minus_psycho_emotional.is_empty() {
            recommendations.push(Recommendation {
                text: "Address the supplementary psycho-emotional tasks (the + and - zones)."
                    .to_string(),
                priority: RecommendationPriority::Low,
            });
        }
        if recommendations.is_empty() {
            recommendations.push(Recommendation {
                text: "The state is stable. Preventive observation is recommended.".to_string(),
                priority: RecommendationPriority::Info,
            });
        }

        recommendations
    }
}
