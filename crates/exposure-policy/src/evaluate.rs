use chrono::{DateTime, FixedOffset, Utc};
use exposure_core::{PolicyConfig, SearchContext, StoreRecord};

use crate::display::hidden_reasons;
use crate::types::EvaluationResult;

/// Whether the store is taking orders right now.
///
/// Requires the instant-pay system to be live and `now` to fall inside the
/// store's operation time. Independent of displayability: a displayable store
/// that is not operating is shown as preparing.
#[must_use]
pub fn is_final_operation(store: &StoreRecord, now: DateTime<Utc>, offset: FixedOffset) -> bool {
    store.baropay_live && store.operation_time.contains(now, offset)
}

/// Evaluate one store against the active filter mode.
///
/// Pure and deterministic; `rank` is left unset.
#[must_use]
pub fn evaluate(store: &StoreRecord, ctx: &SearchContext, policy: &PolicyConfig) -> EvaluationResult {
    let hidden_reasons = hidden_reasons(store, ctx, policy);
    let final_operation = is_final_operation(store, ctx.now, policy.utc_offset);

    if !hidden_reasons.is_empty() {
        tracing::debug!(
            store_id = %store.store_id,
            filter_mode = %ctx.filter_mode,
            reasons = ?hidden_reasons,
            "store hidden"
        );
    }

    EvaluationResult {
        store_id: store.store_id.clone(),
        displayable: hidden_reasons.is_empty(),
        final_operation,
        rank: None,
        rank_score: store.rank_score,
        hidden_reasons,
    }
}
