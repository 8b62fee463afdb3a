use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{RawProfile, Strategy};

/// Request to score or explain one pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub strategy: Strategy,
    pub a: RawProfile,
    pub b: RawProfile,
}

/// Request to rank candidates against a subject
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(default)]
    pub strategy: Strategy,
    pub subject: RawProfile,
    #[validate(
        length(min = 1, max = 1000),
        custom(function = "validate_candidate_ids")
    )]
    pub candidates: Vec<RawProfile>,
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(rename = "minScore", alias = "min_score", default)]
    pub min_score: Option<u8>,
}

/// Every candidate needs an id so the caller can map scores back
#[allow(clippy::ptr_arg)]
fn validate_candidate_ids(candidates: &Vec<RawProfile>) -> Result<(), ValidationError> {
    let missing = candidates.iter().any(|candidate| {
        candidate
            .user_id
            .as_deref()
            .map_or(true, |id| id.trim().is_empty())
    });

    if missing {
        let mut error = ValidationError::new("missing_user_id");
        error.message = Some("every candidate must carry a non-empty userId".into());
        return Err(error);
    }

    Ok(())
}
