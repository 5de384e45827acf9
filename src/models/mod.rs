// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, ResumeData, WorkExperience, Education, JobPosting,
    MatchResult, ExperienceMatch, SkillsMatch, EducationMatch, LocationMatch,
    MismatchReason, MismatchCategory, Severity, Suggestion, SuggestionType, ScoringWeights,
};
pub use requests::FitCheckRequest;
pub use responses::{FitCheckResponse, ApplyCheckResponse, HealthResponse, ErrorResponse};
