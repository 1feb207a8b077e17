//! End-to-end corrections checked against a golden file.
//!
//! `tests/golden/corrections.json` holds a small vocabulary, a frequency
//! table and, for each test word and search mode, the expected candidate
//! set and both rankings.
//!
//! Run: cargo test -p respell-engine --test corrections

use std::collections::BTreeSet;
use std::path::PathBuf;

use respell_engine::{
    CandidateSet, FrequencyModel, RespellHandle, SearchMode, best, best_by_distance,
    best_by_frequency, load_vocabulary, suggest,
};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_golden() -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/corrections.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|v| v.as_str().expect("expected a string").to_string())
        .collect()
}

fn frequencies(golden: &Value) -> FrequencyModel {
    serde_json::from_value(golden["frequencies"].clone()).expect("frequency table")
}

struct Case {
    word: String,
    mode: SearchMode,
    candidates: BTreeSet<String>,
    by_distance: String,
    by_frequency: String,
}

fn cases(golden: &Value) -> Vec<Case> {
    golden["cases"]
        .as_array()
        .expect("cases array")
        .iter()
        .map(|c| Case {
            word: c["word"].as_str().expect("word").to_string(),
            mode: c["mode"].as_str().expect("mode").parse().expect("valid mode"),
            candidates: strings(&c["candidates"]).into_iter().collect(),
            by_distance: c["by_distance"].as_str().expect("by_distance").to_string(),
            by_frequency: c["by_frequency"].as_str().expect("by_frequency").to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_candidate_sets() {
    let golden = load_golden();
    let vocab = load_vocabulary(strings(&golden["vocabulary"]));
    let mut failures = Vec::new();

    for case in cases(&golden) {
        let got: BTreeSet<String> = suggest(&case.word, &vocab, case.mode).into_iter().collect();
        if got != case.candidates {
            failures.push(format!(
                "{:?} ({}): expected {:?}, got {:?}",
                case.word, case.mode, case.candidates, got
            ));
        }
    }

    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn golden_rankings() {
    let golden = load_golden();
    let model = frequencies(&golden);
    let mut failures = Vec::new();

    for case in cases(&golden) {
        let candidates: CandidateSet = case.candidates.iter().cloned().collect();
        let by_distance = best_by_distance(&case.word, &candidates);
        let by_frequency = best_by_frequency(&candidates, &model);
        if by_distance != case.by_distance || by_frequency != case.by_frequency {
            failures.push(format!(
                "{:?}: expected ({}, {}), got ({}, {})",
                case.word, case.by_distance, case.by_frequency, by_distance, by_frequency
            ));
        }
        assert_eq!(best(&case.word, &candidates, None), by_distance);
        assert_eq!(best(&case.word, &candidates, Some(&model)), by_frequency);
    }

    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn golden_through_handle() {
    let golden = load_golden();
    let vocab = load_vocabulary(strings(&golden["vocabulary"]));
    let mut handle = RespellHandle::new(vocab).with_model(frequencies(&golden));

    for case in cases(&golden) {
        handle.set_mode(case.mode);
        let correction = handle.correct(&case.word);
        assert_eq!(correction.best, case.by_frequency, "word {:?}", case.word);
        assert_eq!(correction.ranking.by_distance, case.by_distance, "word {:?}", case.word);
    }
}

#[test]
fn exhaustive_is_superset_of_short_circuit() {
    let golden = load_golden();
    let vocab = load_vocabulary(strings(&golden["vocabulary"]));

    for word in ["weke", "sheeep", "shoop", "hte"] {
        let short: BTreeSet<String> = suggest(word, &vocab, SearchMode::ShortCircuit)
            .into_iter()
            .collect();
        let all: BTreeSet<String> = suggest(word, &vocab, SearchMode::Exhaustive)
            .into_iter()
            .collect();
        assert!(short.is_subset(&all), "word {word:?}");
    }
}
