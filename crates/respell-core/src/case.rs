// Case folding of raw input.

/// Lowercase a word. This is the only normalization the engine applies
/// to raw input.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Returns `true` if the word differs from its lowercase form.
pub fn needs_case_fold(word: &str) -> bool {
    fold_case(word) != word
}
