use crate::substring::Substring;
use thiserror::Error;
use tracing::debug;

/// Selection cannot be satisfied: fewer mutually non-overlapping candidates
/// exist than were requested.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error(
        "cannot find {requested} non-overlapping substrings, \
         only found {found} non-overlapping substrings"
    )]
    NotEnough { requested: usize, found: usize },
}

/// Selects the `num_largest` lexicographically largest mutually
/// non-overlapping substrings.
///
/// Candidates are sorted by text descending (codepoint order; the sort is
/// stable, so candidates with identical text keep their scan order) and
/// accepted greedily: a candidate wins iff it overlaps no earlier winner.
/// The returned winners are in acceptance order, i.e. text descending.
///
/// Greedy-by-value selection is not globally optimal under arbitrary overlap
/// constraints; it is the deterministic policy this tool commits to.
pub fn find_largest_substrings(
    mut candidates: Vec<Substring>,
    num_largest: usize,
) -> Result<Vec<Substring>, SelectionError> {
    candidates.sort_by(|a, b| b.text.cmp(&a.text));

    let mut winners: Vec<Substring> = Vec::with_capacity(num_largest);
    for candidate in candidates {
        if winners.iter().all(|winner| candidate.no_overlap(winner)) {
            debug!("Accepted {}", candidate);
            winners.push(candidate);
        }
        if winners.len() >= num_largest {
            return Ok(winners);
        }
    }

    Err(SelectionError::NotEnough {
        requested: num_largest,
        found: winners.len(),
    })
}
