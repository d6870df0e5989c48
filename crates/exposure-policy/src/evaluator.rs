use exposure_core::{
    ClockError, CpcPlacement, DeliveryContext, FilterMode, PolicyConfig, RawStoreRecord,
    SearchContext,
};

use crate::batch::evaluate_and_rank;
use crate::clock::Clock;
use crate::feed::{apply_ranking_feed, RankingFeed};
use crate::types::RankedResponse;

/// One search request as handed over by the serving layer.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub filter_mode: FilterMode,
    pub delivery: Option<DeliveryContext>,
    pub candidates: Vec<RawStoreRecord>,
    pub ads: Vec<CpcPlacement>,
}

/// Policy plus its collaborators: a clock for `now` and a re-ranking feed.
#[derive(Debug)]
pub struct ExposureEvaluator<C, F> {
    policy: PolicyConfig,
    clock: C,
    feed: F,
}

impl<C: Clock, F: RankingFeed> ExposureEvaluator<C, F> {
    pub fn new(policy: PolicyConfig, clock: C, feed: F) -> Self {
        Self {
            policy,
            clock,
            feed,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Read `now` once, rescore candidates from the feed, then evaluate and rank.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError`] when the clock cannot produce `now`; no
    /// candidate is evaluated against a guessed instant.
    pub fn search(&self, request: SearchRequest) -> Result<RankedResponse, ClockError> {
        let now = self.clock.now()?;

        let mut candidates = request.candidates;
        let rescored = apply_ranking_feed(&mut candidates, &self.feed);
        tracing::debug!(rescored, candidates = candidates.len(), "applied ranking feed");

        let ctx = SearchContext {
            filter_mode: request.filter_mode,
            now,
            delivery: request.delivery,
        };
        Ok(evaluate_and_rank(candidates, &ctx, &self.policy, request.ads))
    }
}
