use crate::types::MatchCandidate;

/// Case-insensitive similarity of two strings on a 0-100 scale.
///
/// Normalized Levenshtein distance over characters, rounded to the nearest
/// integer. `score(x, x)` is 100 and `score(a, b) == score(b, a)`.
pub fn score(a: &str, b: &str) -> u8 {
    let similarity = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Highest scoring candidate for `query`.
///
/// Candidates arrive in the catalog's relevance order, so on a tie the
/// earlier one wins.
pub fn best_match<'a>(
    query: &str,
    candidates: &'a [MatchCandidate],
) -> Option<(&'a MatchCandidate, u8)> {
    let mut best: Option<(&MatchCandidate, u8)> = None;
    for candidate in candidates {
        let s = score(query, &candidate.display);
        if best.is_none_or(|(_, top)| s > top) {
            best = Some((candidate, s));
        }
    }
    best
}
