// Suggestion strategy: runs the candidate generators against a lexicon in
// a fixed priority order, in short-circuit or exhaustive mode.

use std::sync::LazyLock;

use respell_core::case::{fold_case, needs_case_fold};
use respell_core::{CandidateSet, Category, SearchMode};
use serde::Serialize;
use tracing::debug;

use super::generators::*;
use super::status::{CategoryReport, SearchStatus};
use crate::vocabulary::Lexicon;

// =========================================================================
// Options and results
// =========================================================================

/// Options controlling one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestOptions {
    pub mode: SearchMode,
    /// Stop after this many vocabulary lookups. `None` searches fully.
    pub max_cost: Option<usize>,
}

impl SuggestOptions {
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_cost(mut self, max_cost: Option<usize>) -> Self {
        self.max_cost = max_cost;
        self
    }
}

/// The outcome of a search: the candidate set plus how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// Matching words, or `{"NO SUGGESTION"}`. Never empty.
    pub candidates: CandidateSet,
    /// One entry per category evaluated, in evaluation order.
    pub reports: Vec<CategoryReport>,
    /// Total vocabulary lookups.
    pub cost: usize,
    /// `true` if the cost budget stopped the search early.
    pub aborted: bool,
}

// =========================================================================
// SuggestionStrategy
// =========================================================================

/// An ordered list of generators.
///
/// Cheap, likely error classes come first so that short-circuit mode can
/// answer without ever reaching the expensive edit-distance expansion.
pub struct SuggestionStrategy {
    generators: Vec<Box<dyn CandidateGenerator>>,
}

impl SuggestionStrategy {
    /// Build a strategy that tries `generators` in the given order.
    pub fn new(generators: Vec<Box<dyn CandidateGenerator>>) -> Self {
        Self { generators }
    }

    /// Categories in the order they are tried.
    pub fn categories(&self) -> Vec<Category> {
        self.generators.iter().map(|g| g.category()).collect()
    }

    /// Find the vocabulary words `word` may be a misspelling of.
    ///
    /// 1. If `word` has uppercase letters and its lowercase form is known,
    ///    that form is the only suggestion, in either mode.
    /// 2. Otherwise the lowercase form goes through every generator in
    ///    order. Short-circuit mode returns the matches of the first
    ///    generator that has any; exhaustive mode returns the union of all.
    /// 3. No match at all yields `{"NO SUGGESTION"}`.
    pub fn generate(
        &self,
        word: &str,
        lexicon: &dyn Lexicon,
        options: &SuggestOptions,
    ) -> Suggestions {
        let mut status = SearchStatus::new(options.max_cost);

        if needs_case_fold(word) {
            if status.should_abort() {
                status.mark_aborted();
                debug!(word, cost = status.cost(), "cost budget exhausted");
                return finish(CandidateSet::no_suggestion(), status);
            }
            let lower = fold_case(word);
            status.charge();
            let known = lexicon.contains(&lower);
            status.record(CategoryReport {
                category: Category::CaseFold,
                generated: 1,
                matched: usize::from(known),
            });
            if known {
                debug!(word, suggestion = %lower, "case fold matched");
                return finish(CandidateSet::single(lower), status);
            }
        }

        let word = fold_case(word);
        let mut found = CandidateSet::new();
        for generator in &self.generators {
            if status.should_abort() {
                status.mark_aborted();
                debug!(word = %word, cost = status.cost(), "cost budget exhausted");
                break;
            }
            let matches = run_generator(generator.as_ref(), &word, lexicon, &mut status);
            let hit = !matches.is_empty();
            found.extend_from(matches);
            if hit && options.mode == SearchMode::ShortCircuit {
                break;
            }
        }

        finish(found.or_no_suggestion(), status)
    }
}

impl Default for SuggestionStrategy {
    fn default() -> Self {
        default_strategy()
    }
}

/// Look up every candidate of one generator.
fn run_generator(
    generator: &dyn CandidateGenerator,
    word: &str,
    lexicon: &dyn Lexicon,
    status: &mut SearchStatus,
) -> CandidateSet {
    let mut generated = 0;
    let mut matches = CandidateSet::new();
    for candidate in generator.candidates(word) {
        if status.should_abort() {
            status.mark_aborted();
            break;
        }
        status.charge();
        generated += 1;
        if lexicon.contains(&candidate) {
            matches.insert(candidate);
        }
    }
    debug!(
        category = %generator.category(),
        generated,
        matched = matches.len(),
        "evaluated candidates"
    );
    status.record(CategoryReport {
        category: generator.category(),
        generated,
        matched: matches.len(),
    });
    matches
}

fn finish(candidates: CandidateSet, status: SearchStatus) -> Suggestions {
    let cost = status.cost();
    let aborted = status.aborted();
    Suggestions {
        candidates,
        reports: status.into_reports(),
        cost,
        aborted,
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// The canonical order: reductions, vowel swaps, combined, single edits,
/// double edits.
pub fn default_strategy() -> SuggestionStrategy {
    SuggestionStrategy::new(vec![
        Box::new(Reductions),
        Box::new(VowelSwaps),
        Box::new(Combined),
        Box::new(EditVariants),
        Box::new(DoubleVariants),
    ])
}

static DEFAULT_STRATEGY: LazyLock<SuggestionStrategy> = LazyLock::new(default_strategy);

/// Candidate set for `word` using the default strategy.
pub fn suggest(word: &str, lexicon: &dyn Lexicon, mode: SearchMode) -> CandidateSet {
    suggest_with(word, lexicon, &SuggestOptions::default().with_mode(mode)).candidates
}

/// Full search result for `word` using the default strategy.
pub fn suggest_with(word: &str, lexicon: &dyn Lexicon, options: &SuggestOptions) -> Suggestions {
    DEFAULT_STRATEGY.generate(word, lexicon, options)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{Vocabulary, load_vocabulary};

    fn vocab(words: &[&str]) -> Vocabulary {
        load_vocabulary(words.iter().copied())
    }

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().copied().collect()
    }

    const BOTH: [SearchMode; 2] = [SearchMode::ShortCircuit, SearchMode::Exhaustive];

    #[test]
    fn default_strategy_order() {
        assert_eq!(default_strategy().categories(), Category::PRIORITY.to_vec());
    }

    #[test]
    fn case_fold_returns_immediately() {
        let v = vocab(&["inside", "insider"]);
        for mode in BOTH {
            let options = SuggestOptions::default().with_mode(mode);
            let result = suggest_with("InSide", &v, &options);
            assert_eq!(result.candidates, set(&["inside"]));
            assert_eq!(result.reports.len(), 1);
            assert_eq!(result.reports[0].category, Category::CaseFold);
            assert_eq!(result.cost, 1);
        }
    }

    #[test]
    fn unknown_uppercase_word_is_lowercased_then_searched() {
        let v = vocab(&["job"]);
        let result = suggest_with("JJOOBBB", &v, &SuggestOptions::default());
        assert_eq!(result.candidates, set(&["job"]));
        assert_eq!(result.reports[0].category, Category::CaseFold);
        assert_eq!(result.reports[0].matched, 0);
        assert_eq!(result.reports[1].category, Category::Reductions);
    }

    #[test]
    fn known_lowercase_word_is_found_by_reductions() {
        let v = vocab(&["inside"]);
        let result = suggest_with("inside", &v, &SuggestOptions::default());
        assert_eq!(result.candidates, set(&["inside"]));
        assert_eq!(result.reports[0].category, Category::Reductions);
    }

    #[test]
    fn short_circuit_prefers_reductions() {
        // "joob" reduces to "job" and vowel-swaps to "joab".
        let v = vocab(&["job", "joab"]);
        assert_eq!(suggest("joob", &v, SearchMode::ShortCircuit), set(&["job"]));
        assert_eq!(
            suggest("joob", &v, SearchMode::Exhaustive),
            set(&["job", "joab"])
        );
    }

    #[test]
    fn short_circuit_stops_at_first_hit() {
        let v = vocab(&["wake", "wyke", "week"]);
        let result = suggest_with("weke", &v, &SuggestOptions::default());
        assert_eq!(result.candidates, set(&["wake", "wyke"]));
        let categories: Vec<Category> = result.reports.iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![Category::Reductions, Category::VowelSwaps]);
    }

    #[test]
    fn exhaustive_unions_every_category() {
        let v = vocab(&["wake", "wyke", "week"]);
        let options = SuggestOptions::default().with_mode(SearchMode::Exhaustive);
        let result = suggest_with("weke", &v, &options);
        assert_eq!(result.candidates, set(&["wake", "week", "wyke"]));
        assert_eq!(result.reports.len(), 5);
    }

    #[test]
    fn combined_category_catches_double_errors() {
        let v = vocab(&["conspiracy"]);
        let result = suggest_with("CUNsperrICY", &v, &SuggestOptions::default());
        assert_eq!(result.candidates, set(&["conspiracy"]));
        assert_eq!(result.reports.last().map(|r| r.category), Some(Category::Combined));
    }

    #[test]
    fn edit_and_double_edit_fallbacks() {
        let v = vocab(&["spelling", "the"]);
        assert_eq!(
            suggest("speling", &v, SearchMode::ShortCircuit),
            set(&["spelling"])
        );
        assert_eq!(suggest("thw", &v, SearchMode::ShortCircuit), set(&["the"]));
        // Two edits away: transpose + delete.
        assert_eq!(suggest("htex", &v, SearchMode::ShortCircuit), set(&["the"]));
    }

    #[test]
    fn no_match_yields_sentinel() {
        let v = vocab(&["the", "wake"]);
        for mode in BOTH {
            let candidates = suggest("zzzzzqx", &v, mode);
            assert!(candidates.is_no_suggestion(), "mode {mode}");
        }
    }

    #[test]
    fn empty_word_yields_sentinel() {
        let v = vocab(&["the"]);
        assert!(suggest("", &v, SearchMode::Exhaustive).is_no_suggestion());
    }

    #[test]
    fn empty_word_can_match_single_letters() {
        let v = vocab(&["a"]);
        assert_eq!(suggest("", &v, SearchMode::ShortCircuit), set(&["a"]));
    }

    #[test]
    fn repeated_calls_agree() {
        let v = vocab(&["wake", "wyke", "week", "job"]);
        for mode in BOTH {
            assert_eq!(suggest("weke", &v, mode), suggest("weke", &v, mode));
        }
    }

    #[test]
    fn budget_stops_search() {
        let v = vocab(&["the"]);
        let options = SuggestOptions::default()
            .with_mode(SearchMode::Exhaustive)
            .with_max_cost(Some(10));
        let result = suggest_with("zzzzzqx", &v, &options);
        assert!(result.aborted);
        assert_eq!(result.cost, 10);
        assert!(result.candidates.is_no_suggestion());
    }

    #[test]
    fn budget_keeps_matches_found_before_abort() {
        let v = vocab(&["job"]);
        let options = SuggestOptions::default()
            .with_mode(SearchMode::Exhaustive)
            .with_max_cost(Some(20));
        let result = suggest_with("jjoobbb", &v, &options);
        assert!(result.aborted);
        assert_eq!(result.candidates, set(&["job"]));
    }

    #[test]
    fn generous_budget_does_not_abort() {
        let v = vocab(&["wake"]);
        let options = SuggestOptions::default().with_max_cost(Some(1_000));
        let result = suggest_with("weke", &v, &options);
        assert!(!result.aborted);
        assert_eq!(result.candidates, set(&["wake"]));
    }

    #[test]
    fn zero_budget_skips_case_fold_lookup() {
        let v = vocab(&["inside"]);
        let options = SuggestOptions::default().with_max_cost(Some(0));
        for word in ["InSide", "inside"] {
            let result = suggest_with(word, &v, &options);
            assert_eq!(result.cost, 0, "word {word:?}");
            assert!(result.aborted, "word {word:?}");
            assert!(result.candidates.is_no_suggestion(), "word {word:?}");
        }
    }

    #[test]
    fn budget_is_never_exceeded() {
        let v = vocab(&["inside", "job", "conspiracy"]);
        for max in [0, 1, 2, 5, 50] {
            let options = SuggestOptions::default()
                .with_mode(SearchMode::Exhaustive)
                .with_max_cost(Some(max));
            for word in ["InSide", "JJOOBBB", "CUNsperrICY", "jjoobbb"] {
                let result = suggest_with(word, &v, &options);
                assert!(result.cost <= max, "{word:?} cost {} > {max}", result.cost);
            }
        }
    }

    #[test]
    fn custom_strategy_order() {
        // "wako" is two vowel swaps away, "week" one transpose away.
        let strategy = SuggestionStrategy::new(vec![Box::new(EditVariants), Box::new(VowelSwaps)]);
        let v = vocab(&["week", "wako"]);
        let result = strategy.generate("weke", &v, &SuggestOptions::default());
        assert_eq!(result.candidates, set(&["week"]));
        assert_eq!(suggest("weke", &v, SearchMode::ShortCircuit), set(&["wako"]));
    }

    #[test]
    fn frequency_model_works_as_lexicon() {
        let model = crate::frequency::build_frequency_model(["the", "ten"], None);
        assert_eq!(
            suggest("teh", &model, SearchMode::ShortCircuit),
            set(&["ten", "the"])
        );
    }
}
