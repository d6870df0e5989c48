use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::raw::RawStoreRecord;
use crate::store::CpcPlacement;
use crate::ConfigError;

/// A search request snapshot: candidate stores plus the CPC slots on offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidatesFile {
    pub candidates: Vec<RawStoreRecord>,
    #[serde(default)]
    pub ads: Vec<CpcPlacement>,
}

/// Load a candidates file. `.json` is read as JSON, anything else as YAML.
///
/// Individual records are not validated here; that happens per candidate
/// during evaluation so one bad record cannot sink the whole file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or is not well-formed.
pub fn load_candidates(path: &Path) -> Result<CandidatesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CandidatesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed: Result<CandidatesFile, String> = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| ConfigError::CandidatesFileParse {
        path: path.display().to_string(),
        reason,
    })
}
