// The reference vocabulary: the set of correctly spelled words.

use hashbrown::HashSet;
use respell_core::token::words;

/// Anything that can answer "is this a known word?".
///
/// The strategy only ever needs membership tests, so it takes a
/// `&dyn Lexicon` rather than a concrete vocabulary type.
pub trait Lexicon {
    /// Returns `true` if `word` is spelled correctly.
    fn contains(&self, word: &str) -> bool;
}

/// An immutable set of known words.
///
/// Built once by a loader and only read afterwards, so a single
/// vocabulary can be shared between threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from already-normalized words.
    ///
    /// Empty strings are skipped. Words are stored as given; lowercasing
    /// is the caller's job (see [`Vocabulary::from_text`]).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Build a vocabulary from raw text: one or more words per line, any
    /// case. The text is tokenized into lowercase `[a-z]+` runs.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(words(text))
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

    /// Iterate over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for Vocabulary {
    fn contains(&self, word: &str) -> bool {
        Vocabulary::contains(self, word)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Build a [`Vocabulary`] from a sequence of normalized words.
pub fn load_vocabulary<I, S>(words: I) -> Vocabulary
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Vocabulary::from_words(words)
}
