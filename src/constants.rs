//! Cross-cutting, shared constants.
//!
//! Secondary values (labels per direction, default config) are derived from these so the
//! resolver, extractor and configuration layers cannot drift apart.

/// A fuzzy candidate must score strictly above this to be considered.
pub const FUZZY_SCORE_THRESHOLD: u8 = 80;

/// Upper bound of the similarity scale.
pub const MAX_SIMILARITY_SCORE: u8 = 100;

/// Placeholder meaning used by the source dictionary for "no real meaning".
pub const SENTINEL_MARKER: &str = "[虛]";

/// Truncated form of [`SENTINEL_MARKER`] that also appears in the source data.
pub const SENTINEL_MARKER_OPEN: &str = "[虛";

/// Line label marking Paiwan text in paired fallback content.
pub const PAIWAN_LABEL: &str = "排灣語：";

/// Line label marking Chinese text in paired fallback content.
pub const CHINESE_LABEL: &str = "中文：";

/// Separator used when joining resolved meanings.
pub const MEANING_SEPARATOR: &str = ", ";

pub const DEFAULT_COLLECTION_NAME: &str = "paiwan_enhanced";

pub const DEFAULT_FALLBACK_LIMIT: u64 = 3;

pub const DEFAULT_FALLBACK_THRESHOLD: f32 = 0.6;

pub const DEFAULT_FALLBACK_TIMEOUT_MS: u64 = 3_000;

pub const DEFAULT_EMBEDDING_DIM: usize = 768;

pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";

pub const DEFAULT_VOCABULARY_PATH: &str = "data/unique_data.json";

/// Returns `true` if `meaning` is one of the sentinel placeholders.
pub fn is_sentinel(meaning: &str) -> bool {
    meaning == SENTINEL_MARKER || meaning == SENTINEL_MARKER_OPEN
}
