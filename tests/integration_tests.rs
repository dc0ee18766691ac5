//! End-to-end tests: CSV files on disk through to lookups and statistics

use std::fs;
use std::path::Path;
use verb_core::charts::{ChartKind, ChartSeries};
use verb_core::config::AppConfig;
use verb_core::error::{LoadError, StatsError};
use verb_core::persistence::save_snapshot;
use verb_core::VerbInfoEngine;

const LOOKUP_CSV: &str = "\
root,romanized,verb_forms,count_vf,frequency
\"khā,khaa\",eat,\"khāyā, khātā, khātī\",5,120
कर,do,\"किया, करता, करती\",12,900
जा,go,\"गया, जाता\",8,700
\"देख, dekh\",see,\"देखा, देखता\",6,300
";

const STATS_CSV: &str = "\
root,romanized,root_length,frequency
v,,1,50
कर,kar,2,900
जा,jaa,2,700
देख,dekh,3,300
सँभाल,sambhaal,5,4
निकल,nikal,4,300
";

fn write_fixtures(dir: &Path) -> AppConfig {
    let lookup_csv = dir.join("merged_verbs.csv");
    let stats_csv = dir.join("output_with_root_length.csv");
    fs::write(&lookup_csv, LOOKUP_CSV).unwrap();
    fs::write(&stats_csv, STATS_CSV).unwrap();
    AppConfig {
        lookup_csv,
        stats_csv,
        ..AppConfig::default()
    }
}

fn engine() -> VerbInfoEngine {
    let dir = tempfile::tempdir().unwrap();
    VerbInfoEngine::load(&write_fixtures(dir.path())).unwrap()
}

#[test]
fn test_every_root_token_resolves() {
    let engine = engine();

    for token in ["khā", "khaa", "khaa ", " कर", "देख", "dekh"] {
        assert!(engine.lookup(token).is_some(), "token {:?} should resolve", token);
    }
    assert_eq!(engine.lookup("khā"), engine.lookup("khaa"));
    assert_eq!(engine.lookup("dekh").unwrap().count_vf, "6");
}

#[test]
fn test_romanized_gloss_any_case() {
    let engine = engine();

    assert_eq!(engine.lookup("EAT").unwrap().root, "khā,khaa");
    assert_eq!(engine.lookup("Go").unwrap().root, "जा");
    assert_eq!(engine.lookup("  sEe ").unwrap().frequency, 300.0);
}

#[test]
fn test_not_found_is_none() {
    let engine = engine();

    assert!(engine.lookup("").is_none());
    assert!(engine.lookup("definitely-not-a-verb-xyz").is_none());
    assert!(engine.lookup("kha").is_none());
}

#[test]
fn test_summary() {
    let summary = engine().summary().unwrap();

    assert_eq!(summary.total_count, 6);
    assert_eq!(summary.longest.root, "सँभाल");
    // "v" has the minimum length but is the placeholder
    assert_eq!(summary.shortest.root, "कर");
    let expected = (1 + 2 + 2 + 3 + 5 + 4) as f64 / 6.0;
    assert!((summary.average_length - expected).abs() < 1e-9);
}

#[test]
fn test_ranking_and_top_n() {
    let engine = engine();
    let ranked = engine.ranked_by_frequency();

    let roots: Vec<&str> = ranked.iter().map(|r| r.root.as_str()).collect();
    assert_eq!(roots, vec!["कर", "जा", "देख", "निकल", "v", "सँभाल"]);
    assert!(ranked.windows(2).all(|w| w[0].frequency >= w[1].frequency));

    assert_eq!(engine.top_n(20).len(), 6);
    assert_eq!(engine.top_n(20), ranked);
    assert_eq!(engine.top_n(2), ranked[..2].to_vec());
}

#[test]
fn test_histogram_sums_to_total() {
    let engine = engine();
    let histogram = engine.histogram();

    assert_eq!(histogram.values().sum::<usize>(), 6);
    assert_eq!(histogram.keys().next(), Some(&1));
    assert_eq!(histogram.keys().last(), Some(&5));
    assert_eq!(histogram[&2], 2);
}

#[test]
fn test_chart_series() {
    let engine = engine();

    match engine.chart(ChartKind::Zipf, None) {
        ChartSeries::Zipf { points } => {
            assert_eq!(points.len(), 6);
            assert_eq!(points[0].x, 0.0);
        }
        other => panic!("unexpected series: {:?}", other),
    }
    match engine.chart(ChartKind::Top, Some(3)) {
        ChartSeries::Leaderboard { entries } => {
            let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
            assert_eq!(labels, vec!["kar", "jaa", "dekh"]);
        }
        other => panic!("unexpected series: {:?}", other),
    }
}

#[test]
fn test_missing_column_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path());
    fs::write(&config.stats_csv, "root,romanized,frequency\nकर,kar,900\n").unwrap();

    match VerbInfoEngine::load(&config) {
        Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "root_length"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("load should fail"),
    }
}

#[test]
fn test_missing_file_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        lookup_csv: dir.path().join("nope.csv"),
        ..write_fixtures(dir.path())
    };

    assert!(matches!(VerbInfoEngine::load(&config), Err(LoadError::Io { .. })));
}

#[test]
fn test_empty_stats_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path());
    fs::write(&config.stats_csv, "root,romanized,root_length,frequency\n").unwrap();

    let engine = VerbInfoEngine::load(&config).unwrap();
    assert_eq!(engine.summary().unwrap_err(), StatsError::EmptyDataset);
    assert!(engine.lookup("eat").is_some());
}

#[test]
fn test_snapshot_replaces_csv_loading() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path());
    let snapshot = dir.path().join("verbs.bin");
    save_snapshot(&VerbInfoEngine::load(&config).unwrap().datasets(), &snapshot).unwrap();

    // CSVs gone: only the snapshot can satisfy the load
    fs::remove_file(&config.lookup_csv).unwrap();
    fs::remove_file(&config.stats_csv).unwrap();
    let engine = VerbInfoEngine::load(&AppConfig {
        snapshot_path: Some(snapshot),
        ..config
    })
    .unwrap();

    assert_eq!(engine.lookup("EAT").unwrap().frequency, 120.0);
    assert_eq!(engine.summary().unwrap().total_count, 6);
}

#[test]
fn test_corrupt_snapshot_falls_back_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path());
    let snapshot = dir.path().join("verbs.bin");
    fs::write(&snapshot, b"junk").unwrap();

    let engine = VerbInfoEngine::load(&AppConfig {
        snapshot_path: Some(snapshot),
        ..config
    })
    .unwrap();
    assert!(engine.lookup("do").is_some());
}
