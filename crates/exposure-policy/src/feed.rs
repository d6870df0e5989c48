//! Re-ranking feed collaborator.

use std::collections::HashMap;

use exposure_core::RawStoreRecord;

/// Source of per-store ranking scores for the current query.
pub trait RankingFeed {
    fn rank_score(&self, store_id: &str) -> Option<f64>;
}

impl<F: RankingFeed + ?Sized> RankingFeed for &F {
    fn rank_score(&self, store_id: &str) -> Option<f64> {
        (**self).rank_score(store_id)
    }
}

/// Feed that knows no stores; records keep the score they arrived with.
impl RankingFeed for () {
    fn rank_score(&self, _store_id: &str) -> Option<f64> {
        None
    }
}

/// Map-backed feed, e.g. scores resolved ahead of the request.
#[derive(Debug, Clone, Default)]
pub struct StaticRankingFeed {
    scores: HashMap<String, f64>,
}

impl StaticRankingFeed {
    #[must_use]
    pub fn new(scores: HashMap<String, f64>) -> Self {
        Self { scores }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StaticRankingFeed {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl RankingFeed for StaticRankingFeed {
    fn rank_score(&self, store_id: &str) -> Option<f64> {
        self.scores.get(store_id).copied()
    }
}

/// Overwrite `rankScore` with the feed's score wherever the feed has one.
///
/// Records the feed does not know keep their own score, or stay unscored and
/// fail validation later. Returns the number of records rescored.
pub fn apply_ranking_feed<F: RankingFeed + ?Sized>(
    candidates: &mut [RawStoreRecord],
    feed: &F,
) -> usize {
    let mut rescored = 0;
    for candidate in candidates.iter_mut() {
        let Some(id) = candidate.store_id.as_deref().map(str::trim) else {
            continue;
        };
        if let Some(score) = feed.rank_score(id) {
            candidate.rank_score = Some(score);
            rescored += 1;
        }
    }
    rescored
}
