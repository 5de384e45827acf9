use crate::core::location::is_remote;
use crate::core::matcher::MatchError;
use crate::models::{EducationMatch, ExperienceMatch, JobPosting, LocationMatch, ScoringWeights, SkillsMatch};

/// Overall score at or above which a pair counts as a match
pub const MATCH_THRESHOLD: u8 = 70;

/// Location is a soft preference: a miss keeps half credit
const LOCATION_MATCH_SCORE: f64 = 100.0;
const LOCATION_MISS_SCORE: f64 = 50.0;

/// Recommendation bands keyed to the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationTier {
    Excellent,
    Good,
    Partial,
    Poor,
}

impl RecommendationTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::Partial,
            _ => Self::Poor,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match! You meet all the requirements for this position.",
            Self::Good => "Good match! You meet most of the requirements. Consider applying.",
            Self::Partial => "Partial match. You might want to improve your skills before applying.",
            Self::Poor => "This position may not be the best fit for your current profile. Consider developing the required skills first.",
        }
    }
}

/// Reject weights that cannot produce a 0-100 score
pub fn check_weights(weights: &ScoringWeights) -> Result<(), MatchError> {
    let all = [weights.experience, weights.skills, weights.education, weights.location];
    if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(MatchError::InvalidWeights(format!(
            "weights must be finite and non-negative: {:?}",
            weights
        )));
    }
    if (weights.sum() - 1.0).abs() > 1e-3 {
        return Err(MatchError::InvalidWeights(format!(
            "weights must sum to 1.0, got {}",
            weights.sum()
        )));
    }
    Ok(())
}

/// Calculate the overall match score (0-100)
///
/// Scoring formula:
/// score = round(
///     experience_score * 0.35 +
///     skills_score     * 0.35 +
///     education_score  * 0.20 +
///     (location ? 100 : 50) * 0.10
/// )
pub fn calculate_overall_score(
    experience: &ExperienceMatch,
    skills: &SkillsMatch,
    education: &EducationMatch,
    location: &LocationMatch,
    weights: &ScoringWeights,
) -> u8 {
    let location_score = if location.is_match {
        LOCATION_MATCH_SCORE
    } else {
        LOCATION_MISS_SCORE
    };

    let total = f64::from(experience.score) * weights.experience
        + f64::from(skills.score) * weights.skills
        + f64::from(education.score) * weights.education
        + location_score * weights.location;

    total.round().clamp(0.0, 100.0) as u8
}

/// Short diagnostics, in fixed order: experience, skills, location
pub fn build_feedback(
    job: &JobPosting,
    experience: &ExperienceMatch,
    skills: &SkillsMatch,
    location: &LocationMatch,
) -> Vec<String> {
    let mut feedback = Vec::new();

    if !experience.meets_requirement {
        let required = match job.experience() {
            "" => "experience",
            text => text,
        };
        feedback.push(format!(
            "Required {}, but you have {} experience",
            required, experience.candidate
        ));
    }

    if !skills.missing.is_empty() {
        feedback.push(format!("Missing required skills: {}", skills.missing.join(", ")));
    }

    if !location.is_match && !location.required.trim().is_empty() && !is_remote(&location.required) {
        feedback.push(format!(
            "Location preference doesn't match. Job requires: {}",
            location.required
        ));
    }

    feedback
}
