// RespellHandle: top-level integration point for front ends.
//
// Owns the vocabulary, the optional frequency model, the suggestion
// strategy and the search options. Every method takes `&self` and keeps no
// per-query state, so one handle can serve concurrent requests.

use respell_core::{CandidateSet, SearchMode};
use serde::Serialize;
use tracing::debug;

use crate::frequency::FrequencyModel;
use crate::ranking::{Ranking, rank};
use crate::suggestion::{
    CategoryReport, SuggestOptions, SuggestionStrategy, Suggestions, default_strategy,
};
use crate::vocabulary::Vocabulary;

/// Everything known about the correction of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    /// The word as typed.
    pub word: String,
    /// The chosen correction, or `"NO SUGGESTION"`.
    pub best: String,
    pub candidates: CandidateSet,
    pub ranking: Ranking,
    pub reports: Vec<CategoryReport>,
    pub cost: usize,
    pub aborted: bool,
}

/// Spelling corrector over one vocabulary.
pub struct RespellHandle {
    vocabulary: Vocabulary,
    model: Option<FrequencyModel>,
    strategy: SuggestionStrategy,
    options: SuggestOptions,
}

impl RespellHandle {
    /// Create a handle that ranks by distance only.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            model: None,
            strategy: default_strategy(),
            options: SuggestOptions::default(),
        }
    }

    /// Create a handle whose vocabulary is every word of `model`, ranking
    /// by frequency.
    pub fn from_model(model: FrequencyModel) -> Self {
        Self::new(model.vocabulary()).with_model(model)
    }

    /// Attach a frequency model; `best` then ranks by frequency.
    pub fn with_model(mut self, model: FrequencyModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Replace the default generator order.
    pub fn with_strategy(mut self, strategy: SuggestionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.options.mode = mode;
    }

    pub fn set_max_cost(&mut self, max_cost: Option<usize>) {
        self.options.max_cost = max_cost;
    }

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn model(&self) -> Option<&FrequencyModel> {
        self.model.as_ref()
    }

    /// Returns `true` if `word` is in the vocabulary exactly as given.
    pub fn spell(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Candidate set for `word`. Never empty.
    pub fn suggest(&self, word: &str) -> CandidateSet {
        self.suggestions(word).candidates
    }

    /// Full search result for `word`.
    pub fn suggestions(&self, word: &str) -> Suggestions {
        self.strategy.generate(word, &self.vocabulary, &self.options)
    }

    /// Search and rank in one step.
    pub fn correct(&self, word: &str) -> Correction {
        let found = self.suggestions(word);
        let ranking = rank(word, &found.candidates, self.model.as_ref());
        let best = ranking.best().to_string();
        debug!(
            word,
            candidates = found.candidates.len(),
            best = %best,
            "corrected"
        );
        Correction {
            word: word.to_string(),
            best,
            candidates: found.candidates,
            ranking,
            reports: found.reports,
            cost: found.cost,
            aborted: found.aborted,
        }
    }
}
