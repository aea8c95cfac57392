//! Counterpart extraction from paired-line fallback content.
//!
//! Fallback hits carry text of alternating labelled lines:
//!
//! ```text
//! 排灣語：<paiwan sentence>
//! 中文：<chinese sentence>
//! ```
//!
//! [`extract`] finds the first line in the query's language containing the query and returns
//! the adjacent counterpart line with its label stripped.


use tracing::trace;

use crate::direction::Direction;

/// Extracts the counterpart of `query` from `content`, or an empty string.
///
/// A line matches when it starts with the direction's query label and the remainder
/// contains `query`. Only the first matching line is considered; if its neighbour at
/// [`Direction::counterpart_offset`] is missing or lacks the counterpart label, nothing is
/// extracted.
pub fn extract(query: &str, content: &str, direction: Direction) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let query_label = direction.query_label();

    let Some(position) = lines.iter().position(|line| {
        line.strip_prefix(query_label)
            .is_some_and(|text| text.contains(query))
    }) else {
        trace!(%direction, "No labelled line contains the query");
        return String::new();
    };

    let counterpart = position
        .checked_add_signed(direction.counterpart_offset())
        .and_then(|i| lines.get(i))
        .and_then(|line| line.strip_prefix(direction.counterpart_label()));

    match counterpart {
        Some(text) => text.trim().to_string(),
        None => {
            trace!(%direction, line = position, "Matched line has no counterpart");
            String::new()
        }
    }
}
