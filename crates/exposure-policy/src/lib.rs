//! Store exposure policy for the delivery-tab search.
//!
//! Decides, per candidate store, whether it may be shown (`displayable`) and
//! whether it is taking orders (`final_operation`), then ranks displayable
//! stores by the re-ranking feed's score and caps the list. Everything here
//! is pure; `now` and ranking scores come from injected collaborators.

pub mod batch;
pub mod clock;
mod display;
pub mod error;
pub mod evaluate;
pub mod evaluator;
pub mod feed;
pub mod rank;
pub mod types;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use batch::evaluate_and_rank;
pub use clock::{Clock, FixedClock, MonotonicClock, SystemClock};
pub use error::{CandidateError, EvaluationError};
pub use evaluate::{evaluate, is_final_operation};
pub use evaluator::{ExposureEvaluator, SearchRequest};
pub use feed::{apply_ranking_feed, RankingFeed, StaticRankingFeed};
pub use rank::rank_and_cap;
pub use types::{EvaluationResult, Exposure, HiddenReason, RankedResponse};
