// Suggestion generation: produces the set of vocabulary words a misspelled
// word may have been meant as.
//
// Architecture:
//   - `pattern`: option patterns (slots of alternatives) and their expansion
//   - `generators`: one lazy candidate generator per error category
//   - `status`: cost budget, abort condition and per-category reports
//   - `strategy`: runs the generators in priority order against a lexicon

pub mod generators;
pub mod pattern;
pub mod status;
pub mod strategy;

pub use generators::{
    CandidateGenerator, combined, double_variants, edit_variants, reductions, vowel_swaps,
};
pub use pattern::{OptionPattern, Slot};
pub use status::{CategoryReport, SearchStatus};
pub use strategy::{
    SuggestOptions, SuggestionStrategy, Suggestions, default_strategy, suggest, suggest_with,
};
