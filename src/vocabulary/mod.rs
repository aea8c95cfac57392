//! Vocabulary index: raw word pairs grouped into an immutable lookup table.
//!
//! - [`load_word_pairs`] reads the persisted pair list.
//! - [`VocabularyIndex::build`] trims, filters and groups pairs for one direction.

pub mod error;
pub mod index;
pub mod loader;
pub mod model;


pub use error::VocabularyError;
pub use index::VocabularyIndex;
pub use loader::{load_word_pairs, parse_word_pairs};
pub use model::{BuildStats, VocabularyEntry, WordPair};

use tracing::debug;

use crate::constants::is_sentinel;
use crate::direction::Direction;

/// Builds the index for `direction` from Paiwan → Chinese oriented pairs.
///
/// A pair whose Chinese side is a sentinel is dropped from both directions, so the
/// marker never becomes a Chinese lookup key.
pub fn build_for_direction(pairs: &[WordPair], direction: Direction) -> VocabularyIndex {
    match direction {
        Direction::PaiwanToChinese => VocabularyIndex::build(pairs.iter().cloned()),
        Direction::ChineseToPaiwan => {
            let (sentinels, kept): (Vec<&WordPair>, Vec<&WordPair>) = pairs
                .iter()
                .partition(|pair| is_sentinel(pair.target.trim()));
            debug!(dropped = sentinels.len(), "Sentinel pairs excluded from reverse index");

            VocabularyIndex::build(kept.into_iter().map(WordPair::swapped))
        }
    }
}
