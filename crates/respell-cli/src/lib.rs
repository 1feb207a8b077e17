// respell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use respell_engine::loader::{read_corpus, read_model, read_vocabulary};
use respell_engine::{FrequencyModel, Vocabulary};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Word list file name looked up inside dictionary directories.
const DICT_FILE: &str = "words";

/// Environment variable read by `--dict`: a word list, or a directory
/// containing one.
pub const DICT_ENV: &str = "RESPELL_DICT_PATH";

/// Search for a word list and load it.
///
/// Search order:
/// 1. `dict_path` argument (the `--dict` flag, or `RESPELL_DICT_PATH`)
/// 2. `~/.respell/words`
/// 3. `/usr/share/dict/words`, `/usr/dict/words`
/// 4. `./words`
pub fn load_vocabulary(dict_path: Option<&Path>) -> Result<Vocabulary, String> {
    let path = find_dictionary(dict_path)?;
    read_vocabulary(&path).map_err(|e| e.to_string())
}

/// Return the first existing word list in the search order of
/// [`load_vocabulary`].
pub fn find_dictionary(dict_path: Option<&Path>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(dict_path, home_dir().as_deref());

    if let Some(found) = search_paths.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate word list files.
fn build_search_paths(dict_path: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // An explicit path may name the file itself or its directory.
    if let Some(p) = dict_path.filter(|p| !p.as_os_str().is_empty()) {
        paths.push(p.to_path_buf());
        paths.push(p.join(DICT_FILE));
    }

    if let Some(home) = home {
        paths.push(home.join(".respell").join(DICT_FILE));
    }

    paths.push(PathBuf::from("/usr/share/dict").join(DICT_FILE));
    paths.push(PathBuf::from("/usr/dict").join(DICT_FILE));

    // Fallback for local development
    paths.push(PathBuf::from(DICT_FILE));

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Load a saved model and train on corpus files on top of it.
///
/// Returns `None` when neither a model nor a corpus was given.
pub fn load_model(
    model_path: Option<&Path>,
    corpus: &[PathBuf],
) -> Result<Option<FrequencyModel>, String> {
    let existing = model_path
        .map(read_model)
        .transpose()
        .map_err(|e| e.to_string())?;

    if corpus.is_empty() {
        return Ok(existing);
    }
    read_corpus(corpus, existing).map(Some).map_err(|e| e.to_string())
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the level.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
