//! "Did you mean" suggestions for mistyped commands and flags.
//!
//! Classic edit distance (insertions, deletions, and substitutions each
//! cost 1) between an unrecognized token and a fixed vocabulary. A pure,
//! total function: no state, no partial matches, deterministic output.

/// Maximum edit distance at which a vocabulary entry is still offered as a
/// suggestion. Anything farther is rejected outright.
pub const MAX_SUGGEST_DISTANCE: usize = 3;

/// Compute the edit distance between two strings, per character.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two-row rolling form of the classic DP matrix.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Find the vocabulary entry closest to `token`.
///
/// Takes the minimum edit distance over all entries. Ties resolve to the
/// first entry in vocabulary order (the scan only replaces the running best
/// on a strictly smaller distance), keeping suggestions deterministic.
/// Returns `None` when even the closest entry is farther than
/// `max_distance`.
#[must_use]
pub fn closest<'a>(token: &str, vocabulary: &[&'a str], max_distance: usize) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;

    for &entry in vocabulary {
        let distance = edit_distance(token, entry);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entry, distance));
        }
    }

    match best {
        Some((entry, distance)) if distance <= max_distance => Some(entry),
        _ => None,
    }
}
