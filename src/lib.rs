//! Jobfit - candidate/job fit scoring engine
//!
//! This library scores one candidate profile against one job posting and
//! explains the result. The engine is pure and synchronous; the `routes`
//! module wraps it in a thin HTTP service.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    match_candidate_to_job, generate_mismatch_reasons, generate_improvement_suggestions,
    FitMatcher, MatchError,
};
pub use models::{CandidateProfile, JobPosting, MatchResult, MismatchReason, Suggestion, ScoringWeights};
