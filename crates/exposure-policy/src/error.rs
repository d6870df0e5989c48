use exposure_core::ValidationError;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A candidate that could not be evaluated. The rest of the batch is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateError {
    /// Position of the candidate in the request.
    pub index: usize,
    pub store_id: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: EvaluationError,
}

fn serialize_display<S: Serializer>(err: &EvaluationError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}
