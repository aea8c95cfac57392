//! Translation direction.
//!
//! A [`Direction`] carries everything that differs between the two resolvers: which label
//! marks the query's own line in paired content, which label marks the counterpart line,
//! and where the counterpart line sits relative to the matched one.

use crate::constants::{CHINESE_LABEL, PAIWAN_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Paiwan query, Chinese meanings.
    PaiwanToChinese,
    /// Chinese query, Paiwan words.
    ChineseToPaiwan,
}

impl Direction {
    /// Both directions, Paiwan→Chinese first.
    pub const ALL: [Direction; 2] = [Direction::PaiwanToChinese, Direction::ChineseToPaiwan];

    /// Label prefixing lines written in the query's language.
    pub fn query_label(self) -> &'static str {
        match self {
            Direction::PaiwanToChinese => PAIWAN_LABEL,
            Direction::ChineseToPaiwan => CHINESE_LABEL,
        }
    }

    /// Label prefixing lines written in the result language.
    pub fn counterpart_label(self) -> &'static str {
        match self {
            Direction::PaiwanToChinese => CHINESE_LABEL,
            Direction::ChineseToPaiwan => PAIWAN_LABEL,
        }
    }

    /// Line offset from a matched query line to its counterpart.
    ///
    /// Paired content always lists the Paiwan line first, so a Paiwan match pairs with the
    /// following line and a Chinese match with the preceding one.
    pub fn counterpart_offset(self) -> isize {
        match self {
            Direction::PaiwanToChinese => 1,
            Direction::ChineseToPaiwan => -1,
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::PaiwanToChinese => Direction::ChineseToPaiwan,
            Direction::ChineseToPaiwan => Direction::PaiwanToChinese,
        }
    }

    /// Stable name used in logs and HTTP routes.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::PaiwanToChinese => "paiwan-to-chinese",
            Direction::ChineseToPaiwan => "chinese-to-paiwan",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
