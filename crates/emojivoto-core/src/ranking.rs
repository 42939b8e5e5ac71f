//! Result ranking.

use crate::types::VoteCount;

/// Orders vote counts for presentation.
///
/// Zero counts are dropped. The remainder is sorted by count descending;
/// equal counts are ordered by code ascending so the output is the same
/// for every input permutation.
///
/// # Example
///
/// ```
/// use emojivoto_core::{VoteCount, rank};
///
/// let ranked = rank(vec![
///     VoteCount::new(":fire:", 1),
///     VoteCount::new(":joy:", 3),
///     VoteCount::new(":bacon:", 1),
/// ]);
///
/// let codes: Vec<_> = ranked.iter().map(|c| c.code.as_str()).collect();
/// assert_eq!(codes, [":joy:", ":bacon:", ":fire:"]);
/// ```
pub fn rank(counts: impl IntoIterator<Item = VoteCount>) -> Vec<VoteCount> {
    let mut ranked: Vec<VoteCount> = counts.into_iter().filter(|c| c.count > 0).collect();
    ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
    ranked
}
