// Shared enums: search mode and generator categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How far the selector searches once a category produced a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Stop at the first category whose candidates intersect the vocabulary.
    #[default]
    ShortCircuit,
    /// Evaluate every category and union all matches.
    Exhaustive,
}

/// Error returned when parsing an unknown [`SearchMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search mode {0:?} (expected \"short-circuit\" or \"exhaustive\")")]
pub struct ParseModeError(pub String);

impl FromStr for SearchMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short-circuit" | "short_circuit" | "short" => Ok(Self::ShortCircuit),
            "exhaustive" | "all" => Ok(Self::Exhaustive),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ShortCircuit => "short-circuit",
            Self::Exhaustive => "exhaustive",
        })
    }
}

/// A class of spelling error, each with its own candidate generator.
///
/// Variants are declared in the selector's priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Wrong capitalization only: "InSide" -> "inside".
    CaseFold,
    /// Repeated letters: "jjoobbb" -> "job".
    Reductions,
    /// Wrong vowels: "weke" -> "wake".
    VowelSwaps,
    /// Repeated letters and wrong vowels together: "CUNsperrICY" -> "conspiracy".
    Combined,
    /// One insert, delete, replace or transpose.
    EditVariants,
    /// Two edits.
    DoubleVariants,
}

impl Category {
    /// Generator categories in the order the selector tries them.
    /// `CaseFold` is not listed: it is a pre-check, not a generator.
    pub const PRIORITY: [Category; 5] = [
        Category::Reductions,
        Category::VowelSwaps,
        Category::Combined,
        Category::EditVariants,
        Category::DoubleVariants,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CaseFold => "case-fold",
            Self::Reductions => "reductions",
            Self::VowelSwaps => "vowel-swaps",
            Self::Combined => "combined",
            Self::EditVariants => "edit-variants",
            Self::DoubleVariants => "double-variants",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
