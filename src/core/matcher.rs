use thiserror::Error;
use crate::models::{CandidateProfile, JobPosting, MatchResult, ScoringWeights};
use crate::core::{
    education::evaluate_education,
    experience::evaluate_experience,
    location::evaluate_location,
    scoring::{build_feedback, calculate_overall_score, check_weights, RecommendationTier, MATCH_THRESHOLD},
    skills::evaluate_skills,
};

/// Feedback entry carried by the fallback result
pub const MATCH_FAILURE_FEEDBACK: &str = "Error occurred while matching profile";

/// Errors that can occur while evaluating a candidate/job pair
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Experience value out of range: {0}")]
    ExperienceOutOfRange(String),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),
}

impl MatchResult {
    /// Zeroed result returned when evaluation fails
    pub fn failed() -> Self {
        Self {
            feedback: vec![MATCH_FAILURE_FEEDBACK.to_string()],
            recommendation: RecommendationTier::from_score(0).message().to_string(),
            ..Default::default()
        }
    }
}

/// Candidate/job fit scorer
///
/// # Pipeline Stages
/// 1. Experience, skills, education and location evaluators (independent)
/// 2. Weighted aggregation into the overall score
/// 3. Recommendation tier and feedback
#[derive(Debug, Clone)]
pub struct FitMatcher {
    weights: ScoringWeights,
}

impl FitMatcher {
    pub fn new(weights: ScoringWeights) -> Result<Self, MatchError> {
        check_weights(&weights)?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one candidate against one job
    ///
    /// Never fails: any evaluation error is logged and turned into
    /// [`MatchResult::failed`].
    pub fn match_candidate_to_job(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
        match self.evaluate(candidate, job) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Failed to match candidate to job '{}': {}", job.title, e);
                MatchResult::failed()
            }
        }
    }

    /// Fallible core of [`FitMatcher::match_candidate_to_job`]
    pub fn evaluate(&self, candidate: &CandidateProfile, job: &JobPosting) -> Result<MatchResult, MatchError> {
        let candidate_skills = candidate.all_skills();
        let job_skills: Vec<&str> = job.skills().collect();

        let experience_match = evaluate_experience(job.experience(), candidate.experience_years())?;
        let skills_match = evaluate_skills(candidate_skills.as_slice(), &job_skills);
        let education_match = evaluate_education(&candidate.education, &job.requirements);
        let location_match = evaluate_location(candidate.location(), job.location());

        let overall_score = calculate_overall_score(
            &experience_match,
            &skills_match,
            &education_match,
            &location_match,
            &self.weights,
        );

        let feedback = build_feedback(job, &experience_match, &skills_match, &location_match);
        let recommendation = RecommendationTier::from_score(overall_score).message().to_string();

        tracing::debug!(
            "Scored job '{}': overall={}, experience={}, skills={}, education={}, location={}",
            job.title,
            overall_score,
            experience_match.score,
            skills_match.score,
            education_match.score,
            location_match.is_match
        );

        Ok(MatchResult {
            overall_score,
            is_match: overall_score >= MATCH_THRESHOLD,
            experience_match,
            skills_match,
            education_match,
            location_match,
            feedback,
            recommendation,
        })
    }
}

impl Default for FitMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Score one candidate against one job with the default weights
pub fn match_candidate_to_job(candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
    FitMatcher::with_default_weights().match_candidate_to_job(candidate, job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Education, ResumeData, WorkExperience};

    fn create_candidate(skills: &[&str], years: usize, location: &str) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            resume_data: ResumeData {
                skills: vec![],
                experience: vec![WorkExperience::default(); years],
            },
            education: vec![Education {
                degree: "Bachelor of Engineering".to_string(),
                field: "Computer Science".to_string(),
                institution: "IIT".to_string(),
            }],
            location: Some(location.to_string()),
        }
    }

    fn create_job(experience: &str, skills: &[&str], location: &str) -> JobPosting {
        JobPosting {
            title: "Developer".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: Some(experience.to_string()),
            requirements: vec![],
            location: Some(location.to_string()),
            minimum_match_score: None,
        }
    }

    #[test]
    fn test_full_match() {
        let matcher = FitMatcher::with_default_weights();
        let candidate = create_candidate(&["Rust", "Go"], 3, "Pune");
        let job = create_job("2+ years", &["rust"], "Pune");

        let result = matcher.match_candidate_to_job(&candidate, &job);

        assert_eq!(result.overall_score, 100);
        assert!(result.is_match);
        assert!(result.feedback.is_empty());
        assert!(result.recommendation.starts_with("Excellent match!"));
    }

    #[test]
    fn test_resume_skills_are_unioned() {
        let matcher = FitMatcher::with_default_weights();
        let mut candidate = create_candidate(&["Rust"], 1, "Pune");
        candidate.resume_data.skills = vec!["Kafka".to_string()];
        let job = create_job("", &["Rust", "Kafka"], "");

        let result = matcher.match_candidate_to_job(&candidate, &job);

        assert_eq!(result.skills_match.score, 100);
        assert_eq!(result.skills_match.matched, vec!["Rust", "Kafka"]);
    }

    #[test]
    fn test_evaluation_error_falls_back() {
        let matcher = FitMatcher::with_default_weights();
        let candidate = create_candidate(&["Rust"], 1, "Pune");
        let job = create_job("123456789012345678901234567890 years", &["Rust"], "Pune");

        assert!(matcher.evaluate(&candidate, &job).is_err());

        let result = matcher.match_candidate_to_job(&candidate, &job);
        assert_eq!(result.overall_score, 0);
        assert!(!result.is_match);
        assert_eq!(result.skills_match.score, 0);
        assert!(!result.location_match.is_match);
        assert!(!result.education_match.has_requirement);
        assert_eq!(result.feedback, vec![MATCH_FAILURE_FEEDBACK]);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let weights = ScoringWeights {
            experience: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(FitMatcher::new(weights), Err(MatchError::InvalidWeights(_))));
    }

    #[test]
    fn test_custom_weights_apply() {
        let weights = ScoringWeights {
            experience: 0.0,
            skills: 1.0,
            education: 0.0,
            location: 0.0,
        };
        let matcher = FitMatcher::new(weights).unwrap();
        let candidate = create_candidate(&["Rust"], 0, "Pune");
        let job = create_job("10 years", &["Rust", "Haskell"], "Berlin");

        let result = matcher.match_candidate_to_job(&candidate, &job);

        assert_eq!(result.overall_score, 50);
        assert!(!result.is_match);
    }
}
