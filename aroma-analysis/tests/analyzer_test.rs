//! End-to-end tests for the analysis runner.

use aroma_analysis::engine::RecommendationPriority;
use aroma_analysis::source::{DictionaryRecord, InputRecord, MemorySource, TabularSource};
use aroma_analysis::Analyzer;
use aroma_core::errors::{AnalysisError, SourceError};
use aroma_core::types::{OilId, RowRef, Zone};

fn dict_row(oil: &str, zone: Zone, pe: &str, somatic: &str, group: &str) -> DictionaryRecord {
    DictionaryRecord {
        psycho_emotional: pe.to_string(),
        somatic: somatic.to_string(),
        group: group.to_string(),
        ..DictionaryRecord::new(oil, zone)
    }
}

/// A small but complete questionnaire: two citrus oils forming a builtin
/// combination, a coniferous resource oil, one unknown key.
fn sample_source() -> MemorySource {
    let mut source = MemorySource::new();
    source
        .push_input(
            InputRecord::new(RowRef(2), "Orange", Zone::TriplePlus)
                .with_rank("1")
                .with_request_label("Fatigue complaints"),
        )
        .push_input(InputRecord::new(RowRef(3), "Litsea Cubeba", Zone::Plus))
        .push_input(InputRecord::new(RowRef(4), "Cedar", Zone::TripleMinus))
        .push_input(InputRecord::new(RowRef(5), "Nutmeg", Zone::Plus));
    source
        .push_dictionary(dict_row(
            "Orange",
            Zone::TriplePlus,
            "Need for joy.",
            "Digestive support.",
            "Citrus",
        ))
        .push_dictionary(dict_row(
            "Litsea Cubeba",
            Zone::Plus,
            "Concentration demand.",
            "Vascular tone.",
            "Citrus",
        ))
        .push_dictionary(dict_row(
            "Cedar",
            Zone::TripleMinus,
            "Self-reliance resource.",
            "Kidney support.",
            "Coniferous",
        ));
    source
}

#[test]
fn full_run_produces_rows_groups_and_findings() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let report = analyzer.run(&sample_source()).unwrap();

    assert_eq!(report.request_label, "Fatigue complaints");
    assert_eq!(report.rows.len(), 4);

    // Resolved rows carry interpretation text.
    assert_eq!(report.rows[0].psycho_emotional, "Need for joy.");
    assert_eq!(report.rows[0].rank.map(|r| r.value()), Some(1));
    assert!(report.rows[0].diagnostics.is_empty());

    // The unknown (oil, zone) key is a diagnostic, not an error.
    assert_eq!(
        report.rows[3].diagnostics,
        vec!["key not found: Nutmeg|+".to_string()]
    );
    assert!(report.rows[3].psycho_emotional.is_empty());

    // Orange requires Litsea Cubeba in an accepted zone: rule 1 fires both
    // ways (Orange as main oil, Litsea Cubeba as main oil).
    assert!(!report.findings.is_empty());
    let orange = report
        .findings
        .iter()
        .find(|f| f.main_oil == OilId::from("Orange"))
        .expect("Orange finding");
    assert_eq!(orange.number, 1);
    assert_eq!(orange.matched_labels, vec!["Litsea Cubeba (+)".to_string()]);
    // base 1 + zone 60 + no rank + 10 per matched fact
    assert_eq!(orange.priority, 71);

    // Findings are sorted descending by priority.
    let priorities: Vec<u32> = report.findings.iter().map(|f| f.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(priorities, sorted);

    // Groups come in declaration order, all five present.
    let group_names: Vec<&str> = report.groups.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(
        group_names,
        vec!["Citrus", "Coniferous", "Spice", "Floral", "Woody-Herbal"]
    );
    assert_eq!(report.groups[0].counters.positive(), 2);
    assert_eq!(report.groups[1].counters.negative(), 1);

    // Aggregated counts equal the number of facts with a dictionary entry.
    let total: u32 = report.groups.iter().map(|g| g.counters.total()).sum();
    assert_eq!(total, 3);

    // Zone tasks: +++ is rank-annotated, --- is a resource.
    assert_eq!(
        report.zone_tasks.key_psycho_emotional,
        vec!["Orange (rank 1): Need for joy.".to_string()]
    );
    assert_eq!(
        report.zone_tasks.resource_somatic,
        vec!["Cedar: Kidney support.".to_string()]
    );

    // Each group/zone with exactly one oil yields a notice.
    assert!(report
        .single_oils
        .iter()
        .any(|n| n.contains("Cedar (---)") && n.contains("Coniferous")));
}

#[test]
fn rerunning_unchanged_input_is_idempotent() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let source = sample_source();

    let first = serde_json::to_string(&analyzer.run(&source).unwrap()).unwrap();
    let second = serde_json::to_string(&analyzer.run(&source).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn duplicate_rank_is_reported_and_first_kept() {
    let mut source = MemorySource::new();
    source
        .push_input(InputRecord::new(RowRef(2), "Orange", Zone::TriplePlus).with_rank("2"))
        .push_input(InputRecord::new(RowRef(3), "Cedar", Zone::TriplePlus).with_rank("2"));
    source
        .push_dictionary(dict_row("Orange", Zone::TriplePlus, "pe", "s", "Citrus"))
        .push_dictionary(dict_row("Cedar", Zone::TriplePlus, "pe", "s", "Coniferous"));

    let analyzer = Analyzer::with_defaults().unwrap();
    let report = analyzer.run(&source).unwrap();

    assert_eq!(report.rows[0].rank.map(|r| r.value()), Some(2));
    assert_eq!(report.rows[1].rank, None);
    assert_eq!(report.rows[1].diagnostics.len(), 1);
    assert!(report.rows[1].diagnostics[0].contains("already assigned"));
}

#[test]
fn empty_input_still_reports_declared_groups() {
    let analyzer = Analyzer::with_defaults().unwrap();
    let report = analyzer.run(&MemorySource::new()).unwrap();

    assert!(report.rows.is_empty());
    assert!(report.findings.is_empty());
    assert_eq!(report.request_label, "General request");
    assert_eq!(report.groups.len(), 5);
    assert!(report.groups.iter().all(|g| g.counters.total() == 0));
    assert!(report
        .recommendations
        .iter()
        .all(|r| r.priority != RecommendationPriority::High));
}

#[test]
fn unreadable_source_is_fatal() {
    struct BrokenSource;

    impl TabularSource for BrokenSource {
        fn input_records(&self) -> Result<Vec<InputRecord>, SourceError> {
            Err(SourceError::InputUnavailable("sheet missing".to_string()))
        }

        fn dictionary_records(&self) -> Result<Vec<DictionaryRecord>, SourceError> {
            Ok(Vec::new())
        }
    }

    let analyzer = Analyzer::with_defaults().unwrap();
    let err = analyzer.run(&BrokenSource).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Source(SourceError::InputUnavailable(_))
    ));
}

#[test]
fn combination_references_expand_in_row_text() {
    let mut source = MemorySource::new();
    source.push_input(InputRecord::new(RowRef(2), "Orange", Zone::TriplePlus));
    source.push_dictionary(DictionaryRecord {
        psycho_emotional: "Joy blocked. See combination [2].".to_string(),
        somatic: "None noted.".to_string(),
        group: "Citrus".to_string(),
        combinations: "[1] Overexertion. [2] Adaptation strain".to_string(),
        ..DictionaryRecord::new("Orange", Zone::TriplePlus)
    });

    let analyzer = Analyzer::with_defaults().unwrap();
    let report = analyzer.run(&source).unwrap();

    assert_eq!(
        report.rows[0].psycho_emotional,
        "Joy blocked. Adaptation strain."
    );
}
