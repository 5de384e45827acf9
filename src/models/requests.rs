use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to score one candidate against one job
///
/// Used by both the compatibility check and the apply flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FitCheckRequest {
    #[serde(default)]
    pub candidate: CandidateProfile,
    #[validate(nested)]
    #[serde(default)]
    pub job: JobPosting,
}
