use indexmap::IndexMap;
use tracing::{debug, info};

use super::model::{BuildStats, VocabularyEntry, WordPair};
use crate::constants::is_sentinel;

/// Immutable word → meanings mapping for one direction.
///
/// Built once, then shared read-only (typically behind an `Arc`). Iteration follows the
/// order in which words were first seen, so fuzzy scans resolve ties identically every run.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    entries: IndexMap<String, VocabularyEntry>,
    stats: BuildStats,
}

impl VocabularyIndex {
    /// Builds an index from raw pairs, skipping blank and sentinel entries.
    pub fn build<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = WordPair>,
    {
        let mut entries: IndexMap<String, VocabularyEntry> = IndexMap::new();
        let mut stats = BuildStats::default();

        for pair in pairs {
            let source = pair.source.trim();
            let target = pair.target.trim();

            if source.is_empty() || target.is_empty() {
                stats.skipped_blank += 1;
                continue;
            }

            if is_sentinel(target) {
                stats.skipped_sentinel += 1;
                continue;
            }

            let entry = entries
                .entry(source.to_string())
                .or_insert_with(|| VocabularyEntry::new(source.to_string()));

            if entry.push_meaning(target) {
                stats.accepted += 1;
            } else {
                stats.duplicates += 1;
            }
        }

        info!(
            words = entries.len(),
            accepted = stats.accepted,
            "Vocabulary index built"
        );
        debug!(
            skipped = stats.skipped(),
            skipped_blank = stats.skipped_blank,
            skipped_sentinel = stats.skipped_sentinel,
            duplicates = stats.duplicates,
            "Vocabulary entries skipped"
        );

        Self { entries, stats }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, word: &str) -> Option<&VocabularyEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.values()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }
}
