// Ranking: picks the single best word out of a candidate set.
//
// Two independent scores are offered:
//   - distance: position-wise mismatches against the typed word, over the
//     overlapping prefix only (lower is better)
//   - frequency: corpus count of the candidate (higher is better)
// Ties are always broken alphabetically, so the result is deterministic.

use std::collections::BTreeMap;

use respell_core::{CandidateSet, NO_SUGGESTION};
use serde::Serialize;
use tracing::trace;

use crate::frequency::FrequencyModel;

/// Count positions where `original` and `candidate` differ, comparing only
/// the first `min(len(original), len(candidate))` characters.
///
/// Characters past the end of the shorter word are not counted, so
/// `"cat"` vs `"cats"` scores 0. This is not an edit distance and is not
/// meant to be one: swapping it for Levenshtein changes which word wins.
pub fn prefix_mismatch_distance(original: &str, candidate: &str) -> usize {
    original
        .chars()
        .zip(candidate.chars())
        .filter(|(a, b)| a != b)
        .count()
}

/// Group candidates by their distance to `original`. Each group is in
/// alphabetical order.
pub fn distance_groups(original: &str, candidates: &CandidateSet) -> BTreeMap<usize, Vec<String>> {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for candidate in candidates {
        groups
            .entry(prefix_mismatch_distance(original, candidate))
            .or_default()
            .push(candidate.clone());
    }
    groups
}

/// The candidate closest to `original`; among equally close candidates
/// the alphabetically first.
///
/// `"weke"` with `{"wake", "wyke"}` gives `"wake"`: both differ in one
/// position, and "wake" sorts first.
pub fn best_by_distance(original: &str, candidates: &CandidateSet) -> String {
    if candidates.is_no_suggestion() {
        return NO_SUGGESTION.to_string();
    }
    let groups = distance_groups(original, candidates);
    trace!(original, ?groups, "distance scores");
    groups
        .into_iter()
        .next()
        .and_then(|(_, group)| group.into_iter().next())
        .unwrap_or_else(|| NO_SUGGESTION.to_string())
}

/// The most frequent candidate in `model`; among equally frequent
/// candidates the alphabetically first. Unknown words count as 0.
pub fn best_by_frequency(candidates: &CandidateSet, model: &FrequencyModel) -> String {
    if candidates.is_no_suggestion() {
        return NO_SUGGESTION.to_string();
    }
    let mut best: Option<(&str, u64)> = None;
    // Candidates iterate in alphabetical order; only a strictly higher
    // count replaces the current best.
    for candidate in candidates.iter() {
        let count = model.count(candidate);
        trace!(candidate, count, "frequency score");
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((candidate, count));
        }
    }
    best.map_or_else(|| NO_SUGGESTION.to_string(), |(word, _)| word.to_string())
}

/// The best candidate: by frequency when a model is given, otherwise by
/// distance. The `{"NO SUGGESTION"}` set, or an empty set, yields
/// `"NO SUGGESTION"`.
pub fn best(original: &str, candidates: &CandidateSet, model: Option<&FrequencyModel>) -> String {
    match model {
        Some(model) => best_by_frequency(candidates, model),
        None => best_by_distance(original, candidates),
    }
}

/// Both rankings of one candidate set, side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    /// Winner by prefix-mismatch distance.
    pub by_distance: String,
    /// Its distance, or `None` for the sentinel.
    pub distance: Option<usize>,
    /// Winner by corpus frequency, when a model was supplied.
    pub by_frequency: Option<String>,
    /// Its count.
    pub frequency: Option<u64>,
}

impl Ranking {
    /// The preferred answer: frequency if available, else distance.
    pub fn best(&self) -> &str {
        self.by_frequency.as_deref().unwrap_or(&self.by_distance)
    }
}

/// Run both scoring strategies and report each result.
pub fn rank(original: &str, candidates: &CandidateSet, model: Option<&FrequencyModel>) -> Ranking {
    let by_distance = best_by_distance(original, candidates);
    let distance = (by_distance != NO_SUGGESTION)
        .then(|| prefix_mismatch_distance(original, &by_distance));
    let by_frequency = model.map(|m| best_by_frequency(candidates, m));
    let frequency = model
        .zip(by_frequency.as_deref())
        .filter(|(_, word)| *word != NO_SUGGESTION)
        .map(|(m, word)| m.count(word));
    Ranking {
        by_distance,
        distance,
        by_frequency,
        frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::build_frequency_model;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().copied().collect()
    }

    // --- distance ---

    #[test]
    fn distance_counts_positional_mismatches() {
        assert_eq!(prefix_mismatch_distance("weke", "wake"), 1);
        assert_eq!(prefix_mismatch_distance("weke", "wyke"), 1);
        assert_eq!(prefix_mismatch_distance("teh", "the"), 2);
        assert_eq!(prefix_mismatch_distance("same", "same"), 0);
    }

    #[test]
    fn distance_ignores_length_overhang() {
        assert_eq!(prefix_mismatch_distance("cat", "cats"), 0);
        assert_eq!(prefix_mismatch_distance("cats", "cat"), 0);
        assert_eq!(prefix_mismatch_distance("jjoobbb", "job"), 2);
        assert_eq!(prefix_mismatch_distance("", "anything"), 0);
    }

    #[test]
    fn distance_is_case_sensitive() {
        assert_eq!(prefix_mismatch_distance("InSide", "inside"), 2);
    }

    #[test]
    fn groups_by_distance() {
        let groups = distance_groups("weke", &set(&["wyke", "wake", "week"]));
        assert_eq!(groups[&1], vec!["wake", "wyke"]);
        assert_eq!(groups[&2], vec!["week"]);
    }

    #[test]
    fn best_by_distance_breaks_ties_alphabetically() {
        assert_eq!(best_by_distance("weke", &set(&["wake", "wyke"])), "wake");
        assert_eq!(best_by_distance("weke", &set(&["wyke", "week"])), "wyke");
    }

    #[test]
    fn best_by_distance_prefers_shorter_overlap_matches() {
        // "job" overlaps "jjoobbb" in 3 positions with 2 mismatches; "jobs"
        // has 3 mismatches over 4 positions.
        assert_eq!(best_by_distance("jjoobbb", &set(&["job", "jobs"])), "job");
    }

    // --- frequency ---

    #[test]
    fn best_by_frequency_picks_most_common() {
        let model = build_frequency_model(["the", "the", "the", "ten"], None);
        assert_eq!(best_by_frequency(&set(&["the", "ten"]), &model), "the");
    }

    #[test]
    fn frequency_ties_break_alphabetically() {
        let model = build_frequency_model(["ten", "the"], None);
        assert_eq!(best_by_frequency(&set(&["the", "ten"]), &model), "ten");
        let empty = FrequencyModel::new();
        assert_eq!(best_by_frequency(&set(&["the", "ten"]), &empty), "ten");
    }

    // --- combined entry points ---

    #[test]
    fn best_uses_model_when_given() {
        let model = build_frequency_model(["the", "the", "ten"], None);
        let candidates = set(&["the", "ten"]);
        assert_eq!(best("teh", &candidates, Some(&model)), "the");
        // Without a model: "ten" differs in 1 position, "the" in 2.
        assert_eq!(best("teh", &candidates, None), "ten");
    }

    #[test]
    fn sentinel_passes_through() {
        let model = build_frequency_model(["the"], None);
        let sentinel = CandidateSet::no_suggestion();
        assert_eq!(best("zzzzzqx", &sentinel, None), NO_SUGGESTION);
        assert_eq!(best("zzzzzqx", &sentinel, Some(&model)), NO_SUGGESTION);
    }

    #[test]
    fn empty_set_yields_sentinel() {
        let empty = CandidateSet::new();
        assert_eq!(best("abc", &empty, None), NO_SUGGESTION);
        assert_eq!(best("abc", &empty, Some(&FrequencyModel::new())), NO_SUGGESTION);
    }

    #[test]
    fn rank_reports_both_strategies() {
        let model = build_frequency_model(["the", "the", "ten"], None);
        let ranking = rank("teh", &set(&["the", "ten"]), Some(&model));
        assert_eq!(ranking.by_distance, "ten");
        assert_eq!(ranking.distance, Some(1));
        assert_eq!(ranking.by_frequency.as_deref(), Some("the"));
        assert_eq!(ranking.frequency, Some(2));
        assert_eq!(ranking.best(), "the");
    }

    #[test]
    fn rank_without_model() {
        let ranking = rank("weke", &set(&["wake", "wyke"]), None);
        assert_eq!(ranking.best(), "wake");
        assert_eq!(ranking.by_frequency, None);
        assert_eq!(ranking.frequency, None);
    }

    #[test]
    fn rank_of_sentinel() {
        let model = FrequencyModel::new();
        let ranking = rank("zz", &CandidateSet::no_suggestion(), Some(&model));
        assert_eq!(ranking.by_distance, NO_SUGGESTION);
        assert_eq!(ranking.distance, None);
        assert_eq!(ranking.frequency, None);
    }
}
