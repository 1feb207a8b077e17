// respell-engine: suggests the most likely correct spelling of a word.
//
// Architecture:
//   - `vocabulary` / `frequency`: the read-only reference data
//   - `suggestion`: candidate generators, the option pattern they expand,
//     and the strategy that runs them against a vocabulary
//   - `ranking`: picks one word out of a candidate set
//   - `handle`: owns the data and options; the entry point for front ends
//   - `loader`: file I/O for dictionaries, corpora and saved models

pub mod frequency;
pub mod handle;
pub mod loader;
#[cfg(feature = "misspell")]
pub mod misspell;
pub mod ranking;
pub mod suggestion;
pub mod vocabulary;

use std::path::PathBuf;

pub use frequency::{FrequencyModel, build_frequency_model};
pub use handle::{Correction, RespellHandle};
pub use ranking::{Ranking, best, best_by_distance, best_by_frequency, rank};
pub use respell_core::{CandidateSet, Category, NO_SUGGESTION, SearchMode};
pub use suggestion::{SuggestOptions, Suggestions, suggest, suggest_with};
pub use vocabulary::{Lexicon, Vocabulary, load_vocabulary};

/// Errors raised while loading or saving reference data.
///
/// The suggestion engine itself never fails; only file I/O does.
#[derive(Debug, thiserror::Error)]
pub enum RespellError {
    /// A dictionary, corpus or model file could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A saved frequency model is not valid JSON.
    #[error("invalid frequency model {}: {source}", .path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
