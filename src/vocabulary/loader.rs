use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use super::error::VocabularyError;
use super::model::WordPair;

const PAIWAN_FIELD: &str = "paiwan";
const CHINESE_FIELD: &str = "chinese";

/// Reads the persisted pair list and returns it oriented Paiwan → Chinese.
///
/// The file is a JSON array of `{"paiwan": ..., "chinese": ...}` objects. Elements that are
/// not objects, or whose fields are missing or not strings, become blank pairs and are
/// dropped later by the index build.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_word_pairs(path: &Path) -> Result<Vec<WordPair>, VocabularyError> {
    let raw = std::fs::read_to_string(path).map_err(|e| VocabularyError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let pairs = parse_word_pairs(&raw).map_err(|e| VocabularyError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(pairs = pairs.len(), "Vocabulary file read");
    Ok(pairs)
}

/// Parses the JSON pair list from a string.
pub fn parse_word_pairs(raw: &str) -> Result<Vec<WordPair>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_str(raw)?;

    Ok(values
        .iter()
        .map(|value| {
            WordPair::new(
                string_field(value, PAIWAN_FIELD),
                string_field(value, CHINESE_FIELD),
            )
        })
        .collect())
}

fn string_field<'a>(value: &'a Value, field: &str) -> &'a str {
    value.get(field).and_then(Value::as_str).unwrap_or("")
}
