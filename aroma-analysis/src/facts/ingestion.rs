//! The ingestion boundary.
//!
//! Validation here is advisory: an offending cell is discarded and the batch
//! continues. Rank uniqueness is always re-derived over the full fact set,
//! because a zone edit can retroactively legalize or invalidate a rank
//! elsewhere. The engine layers downstream never see malformed data.

use aroma_core::config::AnalysisProfile;
use aroma_core::errors::IngestError;
use aroma_core::types::{Fact, Rank, Zone};

use crate::source::InputRecord;

use super::index::FactIndex;

/// Result of one ingestion pass: the rebuilt index plus every validation
/// failure encountered, in row order.
#[derive(Debug, Default)]
pub struct Ingestion {
    pub index: FactIndex,
    pub issues: Vec<IngestError>,
}

/// Build a fresh [`FactIndex`] from an input snapshot.
///
/// Rows with an empty oil cell are skipped silently (the host has nothing to
/// analyze there). Rank cells are captured for every zone but validated for
/// uniqueness only among `+++` facts.
pub fn ingest(records: &[InputRecord], profile: &AnalysisProfile) -> Ingestion {
    let mut ingestion = Ingestion::default();

    for record in records {
        let oil = record.oil.trim();
        if oil.is_empty() {
            continue;
        }

        let rank = match record.rank.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(token) if profile.is_rank_token(token) => Rank::parse_token(token),
            Some(token) => {
                ingestion.issues.push(IngestError::InvalidRank {
                    row: record.row,
                    value: token.to_string(),
                });
                None
            }
        };

        ingestion
            .index
            .insert(Fact::new(oil, record.zone, rank, record.row));
    }

    let rank_issues = revalidate_ranks(&mut ingestion.index);
    ingestion.issues.extend(rank_issues);
    ingestion.issues.sort_by_key(|issue| issue.row());
    ingestion
}

/// Full re-derivation of rank uniqueness in the `+++` zone.
///
/// The first fact carrying a given rank wins; later duplicates lose their
/// rank and are reported. Facts outside `+++` keep their rank untouched.
pub fn revalidate_ranks(index: &mut FactIndex) -> Vec<IngestError> {
    let mut issues = Vec::new();
    let mut seen: Vec<Rank> = Vec::new();

    for fact in index.all_facts_mut() {
        if fact.zone != Zone::TriplePlus {
            continue;
        }
        let Some(rank) = fact.rank else { continue };
        if seen.contains(&rank) {
            issues.push(IngestError::DuplicateRank {
                row: fact.source_row,
                rank,
            });
            fact.rank = None;
        } else {
            seen.push(rank);
        }
    }

    issues
}
