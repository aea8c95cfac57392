use std::time::Duration;

use crate::constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_FALLBACK_LIMIT, DEFAULT_FALLBACK_THRESHOLD,
    DEFAULT_FALLBACK_TIMEOUT_MS,
};

#[derive(Debug, Clone)]
pub struct FallbackConfig {
    pub enabled: bool,
    pub collection_name: String,
    pub limit: u64,
    pub score_threshold: f32,
    /// Upper bound for embed + search of one lookup.
    pub timeout: Duration,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            limit: DEFAULT_FALLBACK_LIMIT,
            score_threshold: DEFAULT_FALLBACK_THRESHOLD,
            timeout: Duration::from_millis(DEFAULT_FALLBACK_TIMEOUT_MS),
        }
    }
}

impl FallbackConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn collection_name(mut self, name: &str) -> Self {
        self.collection_name = name.to_string();
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
