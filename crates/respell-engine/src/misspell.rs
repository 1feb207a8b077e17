// Random misspelling: the inverse of the suggestion engine, used to
// produce realistic typos for testing and demos.

use rand::Rng;
use rand::seq::SliceRandom;
use respell_core::CandidateSet;

use crate::suggestion::vowel_swaps;

/// Chance, in percent, that a letter gets repeated by [`inflate`].
const INFLATE_PERCENT: f64 = 40.0;

/// Upper bound (exclusive) on how many copies an inflated letter gets.
const MAX_COPIES: usize = 10;

/// Repeat letters of `word` at random.
///
/// Each letter independently, with 40% probability, is replaced by 0 to 9
/// copies of itself. Zero copies drops the letter.
pub fn inflate<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for c in word.chars() {
        if rng.gen_range(0.0..100.0) < INFLATE_PERCENT {
            let copies = rng.gen_range(0..MAX_COPIES);
            out.extend(std::iter::repeat_n(c, copies));
        } else {
            out.push(c);
        }
    }
    out
}

/// A random misspelling of `word`: drawn uniformly from all vowel swaps of
/// the word plus one random inflation.
pub fn misspell<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut options: CandidateSet = vowel_swaps(word).collect();
    options.insert(inflate(word, rng));
    let options: Vec<String> = options.into_iter().collect();
    options
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| word.to_string())
}
