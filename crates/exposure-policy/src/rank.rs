//! Sort-and-cap pass over evaluated candidates.

use std::cmp::Ordering;

use exposure_core::{FilterMode, RESULT_CAP};

use crate::types::EvaluationResult;

/// Rank every evaluated candidate and keep the exposable ones.
///
/// Candidates are stably sorted by `rank_score` descending, so equal scores
/// keep arrival order (`-0.0` ties with `0.0`). Ranks `1..=N` are assigned over the whole set before
/// filtering; with the pickup filter off only displayable entries ranked
/// `<= RESULT_CAP` survive, so a hidden store still consumes its position.
#[must_use]
pub fn rank_and_cap(
    mut evaluated: Vec<EvaluationResult>,
    filter_mode: FilterMode,
) -> Vec<EvaluationResult> {
    // Scores are finite after validation.
    evaluated.sort_by(|a, b| {
        b.rank_score
            .partial_cmp(&a.rank_score)
            .unwrap_or(Ordering::Equal)
    });

    let cap = match filter_mode {
        FilterMode::PickupOff => RESULT_CAP,
        FilterMode::PickupOn => usize::MAX,
    };

    evaluated
        .into_iter()
        .zip(1..)
        .take(cap)
        .filter_map(|(mut result, rank)| {
            result.displayable.then(|| {
                result.rank = Some(rank);
                result
            })
        })
        .collect()
}
