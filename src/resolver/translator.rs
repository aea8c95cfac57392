use std::sync::Arc;

use tracing::{info, warn};

use super::TranslationResolver;
use super::error::TranslateError;
use crate::direction::Direction;
use crate::fallback::ContextLookup;
use crate::fuzzy::TiePolicy;
use crate::vocabulary::{VocabularyIndex, WordPair, build_for_direction};

/// Both resolvers, built once and shared read-only by request handlers.
pub struct Translator<F: ContextLookup> {
    paiwan_to_chinese: TranslationResolver<F>,
    chinese_to_paiwan: TranslationResolver<F>,
}

impl<F: ContextLookup> std::fmt::Debug for Translator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("paiwan_to_chinese", &self.paiwan_to_chinese)
            .field("chinese_to_paiwan", &self.chinese_to_paiwan)
            .finish()
    }
}

impl<F: ContextLookup> Translator<F> {
    /// Wires prebuilt per-direction indices to a shared fallback.
    pub fn new(
        paiwan_to_chinese: Arc<VocabularyIndex>,
        chinese_to_paiwan: Arc<VocabularyIndex>,
        fallback: Arc<F>,
        tie_policy: TiePolicy,
    ) -> Self {
        Self {
            paiwan_to_chinese: TranslationResolver::new(
                Direction::PaiwanToChinese,
                paiwan_to_chinese,
                fallback.clone(),
                tie_policy,
            ),
            chinese_to_paiwan: TranslationResolver::new(
                Direction::ChineseToPaiwan,
                chinese_to_paiwan,
                fallback,
                tie_policy,
            ),
        }
    }

    /// Builds both indices from Paiwan → Chinese oriented pairs.
    pub fn from_pairs(pairs: &[WordPair], fallback: Arc<F>, tie_policy: TiePolicy) -> Self {
        let forward = build_for_direction(pairs, Direction::PaiwanToChinese);
        let reverse = build_for_direction(pairs, Direction::ChineseToPaiwan);

        info!(
            paiwan_words = forward.len(),
            chinese_words = reverse.len(),
            tie_policy = tie_policy.as_str(),
            "Translator ready"
        );

        Self::new(Arc::new(forward), Arc::new(reverse), fallback, tie_policy)
    }

    pub fn resolver(&self, direction: Direction) -> &TranslationResolver<F> {
        match direction {
            Direction::PaiwanToChinese => &self.paiwan_to_chinese,
            Direction::ChineseToPaiwan => &self.chinese_to_paiwan,
        }
    }

    /// Validates `text` and resolves it in `direction`.
    pub async fn resolve(
        &self,
        direction: Direction,
        text: &str,
    ) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            warn!(%direction, "Rejected empty input");
            return Err(TranslateError::EmptyInput { direction });
        }

        Ok(self.resolver(direction).resolve(text).await)
    }

    pub async fn resolve_paiwan_to_chinese(&self, text: &str) -> Result<String, TranslateError> {
        self.resolve(Direction::PaiwanToChinese, text).await
    }

    pub async fn resolve_chinese_to_paiwan(&self, text: &str) -> Result<String, TranslateError> {
        self.resolve(Direction::ChineseToPaiwan, text).await
    }
}
