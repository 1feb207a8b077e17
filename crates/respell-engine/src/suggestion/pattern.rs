// Option patterns: a word where some positions hold several alternatives.
//
// A pattern is an ordered list of slots. Expanding it yields the cartesian
// product of every slot's choices, joined left to right. The reduction and
// vowel-swap generators build patterns instead of strings so that the
// alternatives for each position stay explicit until expansion.

use respell_core::alphabet::{VOWELS, is_vowel};

/// Longest run of one letter a reduction may produce. English has no
/// words with four identical letters in a row.
pub const MAX_RUN: usize = 3;

/// One position of an [`OptionPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Exactly this text.
    Fixed(String),
    /// Any one of these texts.
    Alternatives(Vec<String>),
}

impl Slot {
    /// The texts this slot can expand to.
    pub fn choices(&self) -> &[String] {
        match self {
            Slot::Fixed(s) => std::slice::from_ref(s),
            Slot::Alternatives(alts) => alts,
        }
    }

    /// Returns `true` for a `Fixed` slot holding a single vowel.
    fn is_single_vowel(&self) -> bool {
        let Slot::Fixed(s) = self else {
            return false;
        };
        let mut chars = s.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if is_vowel(c))
    }
}

/// An ordered sequence of slots, kept in the original word's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionPattern {
    slots: Vec<Slot>,
}

impl OptionPattern {
    /// One fixed slot per character of `word`.
    pub fn from_word(word: &str) -> Self {
        let slots = word.chars().map(|c| Slot::Fixed(c.to_string())).collect();
        Self { slots }
    }

    /// Collapse each run of a repeated letter into a slot offering 1 to
    /// `min(run, MAX_RUN)` copies of that letter. Letters that are not
    /// repeated stay fixed.
    ///
    /// `"hiii"` becomes `[Fixed("h"), Alternatives(["i", "ii", "iii"])]`.
    pub fn reductions(word: &str) -> Self {
        let mut slots = Vec::new();
        let mut chars = word.chars().peekable();
        while let Some(c) = chars.next() {
            let mut run = 1;
            while chars.next_if_eq(&c).is_some() {
                run += 1;
            }
            if run == 1 {
                slots.push(Slot::Fixed(c.to_string()));
            } else {
                let alts = (1..=run.min(MAX_RUN))
                    .map(|n| c.to_string().repeat(n))
                    .collect();
                slots.push(Slot::Alternatives(alts));
            }
        }
        Self { slots }
    }

    /// Replace every fixed single-vowel slot with a slot offering all
    /// [`VOWELS`]. `Alternatives` slots, such as reduced runs, are left
    /// untouched.
    pub fn vowel_swapped(mut self) -> Self {
        for slot in &mut self.slots {
            if slot.is_single_vowel() {
                *slot = Slot::Alternatives(VOWELS.iter().map(|v| v.to_string()).collect());
            }
        }
        self
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of words [`OptionPattern::expand`] yields (saturating).
    pub fn combination_count(&self) -> usize {
        self.slots
            .iter()
            .fold(1usize, |acc, slot| acc.saturating_mul(slot.choices().len()))
    }

    /// Lazily expand into every combination, consuming the pattern.
    pub fn expand(self) -> Expansion {
        Expansion::new(self)
    }
}

/// Iterator over the cartesian product of an [`OptionPattern`].
///
/// Works like an odometer: the rightmost slot advances fastest. Each
/// combination is produced exactly once. A pattern with no slots expands
/// to the single empty word.
#[derive(Debug, Clone)]
pub struct Expansion {
    pattern: OptionPattern,
    indices: Vec<usize>,
    done: bool,
}

impl Expansion {
    fn new(pattern: OptionPattern) -> Self {
        let done = pattern.slots.iter().any(|s| s.choices().is_empty());
        let indices = vec![0; pattern.slots.len()];
        Self {
            pattern,
            indices,
            done,
        }
    }

    fn current(&self) -> String {
        self.pattern
            .slots
            .iter()
            .zip(&self.indices)
            .map(|(slot, &i)| slot.choices()[i].as_str())
            .collect()
    }

    /// Move to the next combination; sets `done` after the last one.
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.pattern.slots[pos].choices().len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Expansion {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let word = self.current();
        self.advance();
        Some(word)
    }
}
