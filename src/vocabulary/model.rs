/// One raw `(source, target)` pair as read from the persisted list.
///
/// Values are kept untrimmed; [`VocabularyIndex::build`](super::VocabularyIndex::build) owns
/// normalisation and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub source: String,
    pub target: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns the pair with source and target exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }
}

/// A source word and its distinct meanings in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    word: String,
    meanings: Vec<String>,
}

impl VocabularyEntry {
    pub(crate) fn new(word: String) -> Self {
        Self {
            word,
            meanings: Vec::new(),
        }
    }

    /// Appends `meaning` unless an identical string is already stored.
    ///
    /// Returns `true` if the meaning was added.
    pub(crate) fn push_meaning(&mut self, meaning: &str) -> bool {
        if self.meanings.iter().any(|m| m == meaning) {
            return false;
        }
        self.meanings.push(meaning.to_string());
        true
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }
}

/// Counters collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Pairs that contributed a new meaning.
    pub accepted: usize,
    /// Pairs with a blank source or target after trimming.
    pub skipped_blank: usize,
    /// Pairs whose target was a sentinel marker.
    pub skipped_sentinel: usize,
    /// Pairs repeating a meaning already stored for the same word.
    pub duplicates: usize,
}

impl BuildStats {
    /// Total pairs excluded from the index.
    pub fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_sentinel + self.duplicates
    }
}
