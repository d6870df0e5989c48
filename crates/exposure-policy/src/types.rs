//! Outputs of one evaluation and of a ranked search.

use exposure_core::{CpcPlacement, FilterMode, StoreId};
use serde::Serialize;

use crate::error::CandidateError;

/// Why a store was kept out of the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenReason {
    NotOpen,
    /// None of the store's ongoing channels is a delivery-tab channel.
    NoDeliveryTabChannel,
    /// On-demand-only store without instant pay.
    BaropayRequired,
    /// On-demand gating cannot run without requester location and center.
    NoDeliveryContext,
    NotServiceable,
    CenterMismatch,
    OutsideDeliveryRadius,
}

/// How a store is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exposure {
    Operating,
    /// Listed, but marked as preparing rather than taking orders.
    Preparing,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub store_id: StoreId,
    pub displayable: bool,
    pub final_operation: bool,
    /// 1-based position after sorting by `rank_score`. `None` until ranked.
    pub rank: Option<usize>,
    pub rank_score: f64,
    /// Every failed displayability predicate. Empty iff `displayable`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hidden_reasons: Vec<HiddenReason>,
}

impl EvaluationResult {
    #[must_use]
    pub fn exposure(&self) -> Exposure {
        match (self.displayable, self.final_operation) {
            (false, _) => Exposure::Hidden,
            (true, true) => Exposure::Operating,
            (true, false) => Exposure::Preparing,
        }
    }
}

/// Ranked, capped response for one search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResponse {
    pub filter_mode: FilterMode,
    /// Displayable stores in descending `rank_score` order.
    pub results: Vec<EvaluationResult>,
    /// CPC placements; always empty with the pickup filter on.
    pub ads: Vec<CpcPlacement>,
    pub errors: Vec<CandidateError>,
}
