// Candidate sets: the deduplicated output of the suggestion selector.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sentinel word returned when no candidate matched the vocabulary.
///
/// It contains a space, so it can never collide with a vocabulary word.
pub const NO_SUGGESTION: &str = "NO SUGGESTION";

/// A set of unique candidate words.
///
/// Backed by an ordered set so that iteration order, and therefore every
/// tie-break that depends on it, is deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet {
    words: BTreeSet<String>,
}

impl CandidateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{"NO SUGGESTION"}` set.
    pub fn no_suggestion() -> Self {
        Self::single(NO_SUGGESTION)
    }

    /// A set holding exactly one word.
    pub fn single(word: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(word);
        set
    }

    /// Returns `true` if this is exactly the `{"NO SUGGESTION"}` set.
    pub fn is_no_suggestion(&self) -> bool {
        self.words.len() == 1 && self.words.contains(NO_SUGGESTION)
    }

    /// Add a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Merge every word of `other` into `self`.
    pub fn extend_from(&mut self, other: CandidateSet) {
        self.words.extend(other.words);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Replace an empty set with the sentinel set.
    pub fn or_no_suggestion(self) -> Self {
        if self.is_empty() {
            Self::no_suggestion()
        } else {
            self
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_merged() {
        let set: CandidateSet = ["wake", "wyke", "wake"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("wake"));
    }

    #[test]
    fn iteration_is_sorted() {
        let set: CandidateSet = ["wyke", "wake", "woke"].into_iter().collect();
        let words: Vec<&str> = set.iter().collect();
        assert_eq!(words, vec!["wake", "woke", "wyke"]);
    }

    #[test]
    fn sentinel_detection() {
        assert!(CandidateSet::no_suggestion().is_no_suggestion());
        assert!(!CandidateSet::new().is_no_suggestion());

        let mut set = CandidateSet::no_suggestion();
        set.insert("the");
        assert!(!set.is_no_suggestion());
    }

    #[test]
    fn empty_becomes_sentinel() {
        assert!(CandidateSet::new().or_no_suggestion().is_no_suggestion());
        let set = CandidateSet::single("job").or_no_suggestion();
        assert_eq!(set, CandidateSet::single("job"));
    }

    #[test]
    fn extend_unions_sets() {
        let mut a: CandidateSet = ["a", "b"].into_iter().collect();
        let b: CandidateSet = ["b", "c"].into_iter().collect();
        a.extend_from(b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn serializes_as_sorted_array() {
        let set: CandidateSet = ["wyke", "wake"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["wake","wyke"]"#);
    }
}
