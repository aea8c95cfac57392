//! Levenshtein-ratio similarity on a 0–100 integer scale.

use crate::constants::MAX_SIMILARITY_SCORE;

/// Similarity of `a` and `b` as an integer percentage.
///
/// Computed as `(len(a) + len(b) - indel(a, b)) / (len(a) + len(b))`, where `indel` is the
/// edit distance with insertions and deletions only (a substitution costs two). Lengths are
/// counted in Unicode scalar values. The percentage is rounded half-to-even. Either side
/// being empty scores 0.
///
/// Comparison is exact; callers lower-case beforehand for case-insensitive scoring.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let distance = total - 2 * longest_common_subsequence(&a, &b);
    let ratio = (total - distance) as f64 / total as f64;

    (ratio * f64::from(MAX_SIMILARITY_SCORE)).round_ties_even() as u8
}

/// Indel edit distance between `a` and `b`.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    a.len() + b.len() - 2 * longest_common_subsequence(&a, &b)
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    // Keep the shorter sequence in the row.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for &oc in outer {
        for (j, &ic) in inner.iter().enumerate() {
            curr[j + 1] = if oc == ic {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
