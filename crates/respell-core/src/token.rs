// Corpus tokenization: splits raw text into lowercase words.

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]+").expect("word pattern is a valid regex"));

/// Extract every word from `text`.
///
/// The text is lowercased first, then every maximal run of `a`-`z` is a
/// word. Digits, punctuation and non-ASCII letters act as separators, so
/// "Don't" yields `["don", "t"]`.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
