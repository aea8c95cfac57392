//! Test fixtures for integration tests.

use paiwan::vocabulary::WordPair;

pub const EMBEDDING_DIM: usize = 32;

pub const TEST_COLLECTION_NAME: &str = "paiwan_test_sentences";

/// A small Paiwan → Chinese vocabulary with repeats, ties and sentinels.
pub const SAMPLE_PAIRS: &[(&str, &str)] = &[
    ("vuvu", "祖父母"),
    ("vuvu", "孫子"),
    ("vuvu", "祖父母"),
    ("kama", "父親"),
    ("tjama", "父親"),
    ("kina", "母親"),
    ("qaqalja", "朋友"),
    ("tjaljaljat", "甲"),
    ("tjaljaljaq", "乙"),
    ("qadaw", "[虛]"),
    ("  ", "空白"),
];

pub fn sample_pairs() -> Vec<WordPair> {
    SAMPLE_PAIRS
        .iter()
        .map(|(p, c)| WordPair::new(*p, *c))
        .collect()
}

/// Same vocabulary in the on-disk JSON shape.
pub fn sample_vocabulary_json() -> String {
    let rows: Vec<serde_json::Value> = SAMPLE_PAIRS
        .iter()
        .map(|(p, c)| serde_json::json!({"paiwan": p, "chinese": c}))
        .collect();
    serde_json::Value::Array(rows).to_string()
}

/// Paired-sentence document in the corpus format.
pub fn paired_sentence(paiwan: &str, chinese: &str) -> String {
    format!("排灣語：{}\n中文：{}", paiwan, chinese)
}
