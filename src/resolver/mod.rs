//! Translation resolution: exact lookup, fuzzy augmentation, then context fallback.
//!
//! [`TranslationResolver`] serves one [`Direction`]; [`Translator`] pairs the two directions
//! behind the input validation the request boundary relies on.

pub mod error;
pub mod translator;


pub use error::TranslateError;
pub use translator::Translator;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::constants::MEANING_SEPARATOR;
use crate::direction::Direction;
use crate::extract::extract;
use crate::fallback::ContextLookup;
use crate::fuzzy::{FuzzyMatcher, TiePolicy};
use crate::vocabulary::VocabularyIndex;

/// Resolver for a single direction over a shared, immutable index.
pub struct TranslationResolver<F: ContextLookup> {
    direction: Direction,
    index: Arc<VocabularyIndex>,
    matcher: FuzzyMatcher,
    fallback: Arc<F>,
}

impl<F: ContextLookup> std::fmt::Debug for TranslationResolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationResolver")
            .field("direction", &self.direction)
            .field("words", &self.index.len())
            .field("tie_policy", &self.matcher.policy())
            .finish_non_exhaustive()
    }
}

impl<F: ContextLookup> TranslationResolver<F> {
    pub fn new(
        direction: Direction,
        index: Arc<VocabularyIndex>,
        fallback: Arc<F>,
        tie_policy: TiePolicy,
    ) -> Self {
        Self {
            direction,
            index,
            matcher: FuzzyMatcher::new(tie_policy),
            fallback,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn index(&self) -> &VocabularyIndex {
        &self.index
    }

    /// Resolves `text` to its joined meanings, or returns `text` unchanged.
    pub async fn resolve(&self, text: &str) -> String {
        let meanings = self.resolve_meanings(text).await;

        if meanings.is_empty() {
            text.to_string()
        } else {
            meanings.join(MEANING_SEPARATOR)
        }
    }

    /// Distinct meanings for `text` in first-seen order; empty when nothing resolved.
    #[instrument(skip(self, text), fields(direction = %self.direction, text_len = text.len()))]
    pub async fn resolve_meanings(&self, text: &str) -> Vec<String> {
        let mut pooled: Vec<String> = self
            .index
            .get(text)
            .map(|entry| entry.meanings().to_vec())
            .unwrap_or_default();
        let exact = pooled.len();

        pooled.extend(self.matcher.find_approximate(text, &self.index));
        debug!(exact, fuzzy = pooled.len() - exact, "Dictionary resolution");

        if pooled.is_empty() {
            let outcome = self.fallback.lookup(text).await;
            if let Some(hit) = outcome.hit() {
                let extracted = extract(text, &hit.content, self.direction);
                if !extracted.is_empty() {
                    pooled.push(extracted);
                }
            }
        }

        dedupe_meanings(pooled)
    }
}

/// Trims, drops empties, and keeps the first occurrence of each meaning.
pub fn dedupe_meanings<I>(meanings: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    meanings
        .into_iter()
        .filter_map(|meaning| {
            let trimmed = meaning.trim();
            (!trimmed.is_empty() && seen.insert(trimmed.to_string())).then(|| trimmed.to_string())
        })
        .collect()
}
