// Word frequency model: how often each word occurs in a training corpus.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::vocabulary::{Lexicon, Vocabulary};

/// Mapping from word to occurrence count.
///
/// Unknown words have a count of 0. Serializes as a plain JSON object
/// (`{"the": 7, "ten": 1}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyModel {
    counts: HashMap<String, u64>,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occurrence count of `word`, or 0 if it was never seen.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: impl Into<String>) {
        self.add_count(word, 1);
    }

    /// Record `n` occurrences of `word`.
    pub fn add_count(&mut self, word: impl Into<String>, n: u64) {
        let entry = self.counts.entry(word.into()).or_insert(0);
        *entry = entry.saturating_add(n);
    }

    /// Add every count of `other` to this model.
    pub fn merge(&mut self, other: &FrequencyModel) {
        for (word, &n) in &other.counts {
            self.add_count(word.as_str(), n);
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, &n| acc.saturating_add(n))
    }

    /// Iterate over `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(w, &n)| (w.as_str(), n))
    }

    /// The set of words seen at least once.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::from_words(self.counts.keys().cloned())
    }
}

impl Lexicon for FrequencyModel {
    fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }
}

/// Count every token of `tokens`, adding to `existing` when given.
///
/// Passing the result of a previous call as `existing` merges several
/// corpora into one model.
pub fn build_frequency_model<I, S>(tokens: I, existing: Option<FrequencyModel>) -> FrequencyModel
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut model = existing.unwrap_or_default();
    for token in tokens {
        model.add(token);
    }
    model
}
