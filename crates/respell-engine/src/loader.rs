// File I/O for reference data: dictionaries, training corpora and saved
// frequency models.

use std::fs;
use std::path::Path;

use respell_core::token::words;
use tracing::debug;

use crate::RespellError;
use crate::frequency::{FrequencyModel, build_frequency_model};
use crate::vocabulary::Vocabulary;

fn read_text(path: &Path) -> Result<String, RespellError> {
    fs::read_to_string(path).map_err(|source| RespellError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a word list (one or more words per line, any case).
pub fn read_vocabulary(path: &Path) -> Result<Vocabulary, RespellError> {
    let vocabulary = Vocabulary::from_text(&read_text(path)?);
    debug!(path = %path.display(), words = vocabulary.len(), "loaded vocabulary");
    Ok(vocabulary)
}

/// Count the words of every corpus file, adding to `existing` when given.
pub fn read_corpus<P: AsRef<Path>>(
    paths: &[P],
    existing: Option<FrequencyModel>,
) -> Result<FrequencyModel, RespellError> {
    let mut model = existing.unwrap_or_default();
    for path in paths {
        let path = path.as_ref();
        model = build_frequency_model(words(&read_text(path)?), Some(model));
        debug!(path = %path.display(), words = model.len(), "trained on corpus");
    }
    Ok(model)
}

/// Load a frequency model saved by [`write_model`].
pub fn read_model(path: &Path) -> Result<FrequencyModel, RespellError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| RespellError::Model {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a frequency model as JSON.
pub fn write_model(path: &Path, model: &FrequencyModel) -> Result<(), RespellError> {
    let json = serde_json::to_string(model).map_err(|source| RespellError::Model {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| RespellError::Io {
        path: path.to_path_buf(),
        source,
    })
}
