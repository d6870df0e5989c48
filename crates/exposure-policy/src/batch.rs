//! Batch entry point: validate, evaluate, rank.

use exposure_core::{CpcPlacement, PolicyConfig, RawStoreRecord, SearchContext};
use rayon::prelude::*;

use crate::error::CandidateError;
use crate::evaluate::evaluate;
use crate::rank::rank_and_cap;
use crate::types::{EvaluationResult, RankedResponse};

/// Evaluate every candidate and return the ranked, capped response.
///
/// Validation and evaluation run in parallel; results are collected in input
/// order so the stable sort in [`rank_and_cap`] stays deterministic. Invalid
/// candidates are reported in [`RankedResponse::errors`] and take no rank
/// position. CPC placements pass through only when the pickup filter is off.
#[must_use]
pub fn evaluate_and_rank(
    candidates: Vec<RawStoreRecord>,
    ctx: &SearchContext,
    policy: &PolicyConfig,
    ads: Vec<CpcPlacement>,
) -> RankedResponse {
    let total = candidates.len();

    let outcomes: Vec<Result<EvaluationResult, CandidateError>> = candidates
        .into_par_iter()
        .enumerate()
        .map(|(index, raw)| {
            let store_id = raw.display_id().to_string();
            raw.validate()
                .map(|store| evaluate(&store, ctx, policy))
                .map_err(|e| CandidateError {
                    index,
                    store_id,
                    error: e.into(),
                })
        })
        .collect();

    let mut evaluated = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(result) => evaluated.push(result),
            Err(err) => {
                tracing::warn!(
                    index = err.index,
                    store_id = %err.store_id,
                    error = %err.error,
                    "candidate rejected"
                );
                errors.push(err);
            }
        }
    }

    let displayable = evaluated.iter().filter(|r| r.displayable).count();
    let results = rank_and_cap(evaluated, ctx.filter_mode);

    let ads = if ctx.filter_mode.serves_cpc_ads() {
        ads
    } else {
        Vec::new()
    };

    tracing::info!(
        filter_mode = %ctx.filter_mode,
        candidates = total,
        rejected = errors.len(),
        displayable,
        returned = results.len(),
        ads = ads.len(),
        "ranked search candidates"
    );

    RankedResponse {
        filter_mode: ctx.filter_mode,
        results,
        ads,
        errors,
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
