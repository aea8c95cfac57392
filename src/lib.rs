//! Paiwan library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Resolution
//! - [`Translator`], [`TranslationResolver`] - Exact, fuzzy, then context resolution
//! - [`VocabularyIndex`], [`WordPair`] - Per-direction dictionary
//! - [`FuzzyMatcher`], [`TiePolicy`] - Approximate key matching
//! - [`extract`] - Counterpart-line extraction from paired content
//!
//! ## Context Fallback
//! - [`ContextFallback`], [`ContextLookup`], [`FallbackOutcome`] - Semantic fallback
//! - [`TextEmbedder`], [`EmbedderConfig`] - Embedding generation
//! - [`QdrantSearch`], [`ContextSearch`] - Vector search over the sentence corpus
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`gateway`] - Axum router and handlers
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod direction;
pub mod embedding;
pub mod extract;
pub mod fallback;
pub mod fuzzy;
pub mod gateway;
pub mod resolver;
pub mod vectordb;
pub mod vocabulary;

pub use config::{Config, ConfigError};
pub use direction::Direction;
pub use embedding::{Embedder, EmbedderConfig, EmbeddingError, TextEmbedder};
pub use extract::extract;
pub use fallback::{ContextFallback, ContextLookup, FallbackConfig, FallbackOutcome};
pub use fuzzy::{FuzzyMatcher, TiePolicy};
pub use resolver::{TranslateError, TranslationResolver, Translator};
pub use vectordb::{ContextSearch, FallbackHit, QdrantSearch, VectorDbError};
#[cfg(any(test, feature = "mock"))]
pub use vectordb::MockContextSearch;
pub use vocabulary::{VocabularyError, VocabularyIndex, WordPair, load_word_pairs};
