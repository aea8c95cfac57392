//! Approximate matching over vocabulary keys.
//!
//! Every key is scored against the query with [`ratio`] (case-insensitive). Keys scoring
//! strictly above [`FUZZY_SCORE_THRESHOLD`] that are not literally the query become
//! candidates; the [`TiePolicy`] decides how candidates sharing the best score combine.

pub mod similarity;


pub use similarity::{indel_distance, ratio};

use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::constants::FUZZY_SCORE_THRESHOLD;
use crate::vocabulary::VocabularyIndex;

/// How candidates with equal best scores are accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiePolicy {
    /// A strictly better candidate replaces the result; an equal one is appended.
    #[default]
    ExtendOnTie,
    /// Only a strictly better candidate replaces the result; the first best wins.
    StrictReplace,
}

impl TiePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TiePolicy::ExtendOnTie => "extend",
            TiePolicy::StrictReplace => "replace",
        }
    }
}

/// Tie policy string was neither `extend` nor `replace`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tie policy '{0}': expected 'extend' or 'replace'")]
pub struct UnknownTiePolicy(pub String);

impl FromStr for TiePolicy {
    type Err = UnknownTiePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extend" => Ok(TiePolicy::ExtendOnTie),
            "replace" => Ok(TiePolicy::StrictReplace),
            _ => Err(UnknownTiePolicy(s.to_string())),
        }
    }
}

/// A vocabulary key that passed the fuzzy threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate<'a> {
    pub word: &'a str,
    pub meanings: &'a [String],
    pub score: u8,
}

/// Fuzzy matcher over a [`VocabularyIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher {
    policy: TiePolicy,
}

impl FuzzyMatcher {
    pub fn new(policy: TiePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TiePolicy {
        self.policy
    }

    /// All candidates above the threshold, in index order.
    pub fn candidates<'a>(
        &self,
        query: &str,
        index: &'a VocabularyIndex,
    ) -> Vec<MatchCandidate<'a>> {
        let lowered = query.to_lowercase();

        index
            .iter()
            .filter(|entry| entry.word() != query)
            .filter_map(|entry| {
                let score = ratio(&lowered, &entry.word().to_lowercase());
                (score > FUZZY_SCORE_THRESHOLD).then_some(MatchCandidate {
                    word: entry.word(),
                    meanings: entry.meanings(),
                    score,
                })
            })
            .collect()
    }

    /// Meanings of the best-scoring candidate(s), in stored order, candidates in scan order.
    pub fn find_approximate(&self, query: &str, index: &VocabularyIndex) -> Vec<String> {
        let mut best_score = 0u8;
        let mut winners: Vec<MatchCandidate<'_>> = Vec::new();

        for candidate in self.candidates(query, index) {
            if candidate.score > best_score {
                best_score = candidate.score;
                winners.clear();
                winners.push(candidate);
            } else if candidate.score == best_score && self.policy == TiePolicy::ExtendOnTie {
                winners.push(candidate);
            }
        }

        trace!(
            query_len = query.len(),
            best_score,
            winners = winners.len(),
            "Fuzzy scan complete"
        );

        winners
            .into_iter()
            .flat_map(|c| c.meanings.iter().cloned())
            .collect()
    }
}

/// [`FuzzyMatcher::find_approximate`] with the default tie policy.
pub fn find_approximate(query: &str, index: &VocabularyIndex) -> Vec<String> {
    FuzzyMatcher::default().find_approximate(query, index)
}
