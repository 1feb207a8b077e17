// Letter sets used by the candidate generators.

/// The lowercase ASCII alphabet, in order. Insertions and replacements
/// draw from this set.
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Vowels considered interchangeable by the vowel-swap generator.
///
/// `y` is included: it behaves as a vowel often enough in English
/// ("gym", "wyke") that confusing it with another vowel is a common typo.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Returns `true` if `c` is one of [`VOWELS`].
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}
