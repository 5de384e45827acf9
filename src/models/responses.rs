use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, MismatchReason, Suggestion};

/// Response for the compatibility check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitCheckResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch_reasons: Option<Vec<MismatchReason>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

/// Response for the apply endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCheckResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub minimum_score: u8,
    pub meets_minimum: bool,
    /// Set when the candidate applies below the job's minimum score
    pub flagged_for_review: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch_reasons: Option<Vec<MismatchReason>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
