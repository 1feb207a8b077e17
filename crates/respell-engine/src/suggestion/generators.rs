// Candidate generators: each maps a word to a lazy sequence of spelling
// variants for one class of error.
//
// All generators are pure. Calling one twice with the same word yields the
// same sequence, so a sequence can be "restarted" by calling again.

use hashbrown::HashSet;
use respell_core::Category;
use respell_core::alphabet::ALPHABET;

use super::pattern::OptionPattern;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A generator for one [`Category`] of spelling error.
///
/// The strategy holds a list of these and runs them in order against a
/// vocabulary.
pub trait CandidateGenerator: Send + Sync {
    /// The error class this generator corrects.
    fn category(&self) -> Category;

    /// Lazily produce the candidate spellings for `word`.
    fn candidates<'a>(&self, word: &'a str) -> Box<dyn Iterator<Item = String> + 'a>;
}

// ---------------------------------------------------------------------------
// Shared helper: de-duplication
// ---------------------------------------------------------------------------

/// Iterator adapter that drops words it has already yielded.
pub struct Distinct<I> {
    inner: I,
    seen: HashSet<String>,
}

impl<I> Distinct<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for Distinct<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let word = self.inner.next()?;
            if !self.seen.contains(&word) {
                self.seen.insert(word.clone());
                return Some(word);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Single edits
// ---------------------------------------------------------------------------

/// Edit operations tried at every split point, in order: delete,
/// transpose, 26 replacements, 26 insertions.
const STEPS_PER_SPLIT: usize = 2 + 2 * ALPHABET.len();

/// All single-edit variants of a word, with repeats.
///
/// For each split `(prefix, suffix)` of the word:
/// - delete: `prefix + suffix[1..]`
/// - transpose: `prefix + suffix[1] + suffix[0] + suffix[2..]`
/// - replace: `prefix + c + suffix[1..]` for every letter `c`
/// - insert: `prefix + c + suffix` for every letter `c`
///
/// Characters outside the alphabet are carried through unchanged.
#[derive(Debug, Clone)]
pub struct Edits {
    chars: Vec<char>,
    split: usize,
    step: usize,
}

impl Edits {
    pub fn new(word: &str) -> Self {
        Self {
            chars: word.chars().collect(),
            split: 0,
            step: 0,
        }
    }

    /// Build the candidate for operation `step` at split point `i`, or
    /// `None` if the operation does not apply there.
    fn build(&self, i: usize, step: usize) -> Option<String> {
        let (prefix, suffix) = self.chars.split_at(i);
        let mut out = String::with_capacity(self.chars.len() + 1);
        out.extend(prefix);
        match step {
            0 => {
                // delete
                let (_, rest) = suffix.split_first()?;
                out.extend(rest);
            }
            1 => {
                // transpose
                if suffix.len() < 2 {
                    return None;
                }
                out.push(suffix[1]);
                out.push(suffix[0]);
                out.extend(&suffix[2..]);
            }
            s if s < 2 + ALPHABET.len() => {
                // replace
                let (_, rest) = suffix.split_first()?;
                out.push(ALPHABET[s - 2]);
                out.extend(rest);
            }
            s => {
                // insert
                out.push(ALPHABET[s - 2 - ALPHABET.len()]);
                out.extend(suffix);
            }
        }
        Some(out)
    }
}

impl Iterator for Edits {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.split <= self.chars.len() {
            if self.step >= STEPS_PER_SPLIT {
                self.split += 1;
                self.step = 0;
                continue;
            }
            let step = self.step;
            self.step += 1;
            if let Some(word) = self.build(self.split, step) {
                return Some(word);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Generator functions
// ---------------------------------------------------------------------------

/// Every word one insert, delete, replace or transpose away from `word`,
/// without repeats.
///
/// The sequence holds at most `54 * (len + 1)` words.
pub fn edit_variants(word: &str) -> impl Iterator<Item = String> + use<> {
    Distinct::new(Edits::new(word))
}

/// Edit variants of every edit variant of `word`, without repeats.
///
/// This is a superset of the words within edit distance 2; the ranker,
/// not this generator, decides how close a candidate really is.
pub fn double_variants(word: &str) -> impl Iterator<Item = String> + use<> {
    Distinct::new(edit_variants(word).flat_map(|w| Edits::new(&w)))
}

/// Every way of shortening runs of a repeated letter to 1, 2 or 3 copies.
///
/// `"jjoobbb"` yields `"job"`, `"jobb"`, `"joobbb"` and so on. A run is
/// never lengthened and never removed entirely.
pub fn reductions(word: &str) -> impl Iterator<Item = String> + use<> {
    OptionPattern::reductions(word).expand()
}

/// Every way of replacing vowels of `word` with other vowels.
///
/// Each vowel position independently takes any of `a e i o u y`; other
/// positions are kept. The length of the word never changes.
pub fn vowel_swaps(word: &str) -> impl Iterator<Item = String> + use<> {
    OptionPattern::from_word(word).vowel_swapped().expand()
}

/// Vowel swaps of every reduction of `word`, without repeats.
///
/// Catches words with both kinds of error: `"cunsperricy"` reduces to
/// `"cunspericy"`, which vowel-swaps to `"conspiracy"`.
pub fn combined(word: &str) -> impl Iterator<Item = String> + use<> {
    Distinct::new(reductions(word).flat_map(|r| vowel_swaps(&r)))
}

// =========================================================================
// Generator types
// =========================================================================

/// Collapse repeated letters. See [`reductions`].
pub struct Reductions;

impl CandidateGenerator for Reductions {
    fn category(&self) -> Category {
        Category::Reductions
    }

    fn candidates<'a>(&self, word: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(reductions(word))
    }
}

/// Substitute vowels. See [`vowel_swaps`].
pub struct VowelSwaps;

impl CandidateGenerator for VowelSwaps {
    fn category(&self) -> Category {
        Category::VowelSwaps
    }

    fn candidates<'a>(&self, word: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(vowel_swaps(word))
    }
}

/// Reductions followed by vowel swaps. See [`combined`].
pub struct Combined;

impl CandidateGenerator for Combined {
    fn category(&self) -> Category {
        Category::Combined
    }

    fn candidates<'a>(&self, word: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(combined(word))
    }
}

/// One edit. See [`edit_variants`].
pub struct EditVariants;

impl CandidateGenerator for EditVariants {
    fn category(&self) -> Category {
        Category::EditVariants
    }

    fn candidates<'a>(&self, word: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(edit_variants(word))
    }
}

/// Two edits. See [`double_variants`].
pub struct DoubleVariants;

impl CandidateGenerator for DoubleVariants {
    fn category(&self) -> Category {
        Category::DoubleVariants
    }

    fn candidates<'a>(&self, word: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(double_variants(word))
    }
}

// =========================================================================
// Tests
// =========================================================================
