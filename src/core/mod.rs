// Core algorithm exports
pub mod education;
pub mod experience;
pub mod insights;
pub mod location;
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use education::evaluate_education;
pub use experience::{evaluate_experience, parse_experience};
pub use insights::{generate_improvement_suggestions, generate_mismatch_reasons};
pub use location::{evaluate_location, is_remote};
pub use matcher::{match_candidate_to_job, FitMatcher, MatchError};
pub use scoring::{calculate_overall_score, RecommendationTier, MATCH_THRESHOLD};
pub use skills::evaluate_skills;
