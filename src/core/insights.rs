//! Explanations and advice derived from an already computed [`MatchResult`].
//!
//! The engine does not decide when these run; callers invoke them when the
//! overall score falls below their own bar.

use crate::core::location::is_remote;
use crate::models::{MatchResult, MismatchCategory, MismatchReason, Severity, Suggestion, SuggestionType};

/// Education scores below this count as a gap when a requirement exists
const EDUCATION_GAP_SCORE: u8 = 70;

fn has_education_gap(result: &MatchResult) -> bool {
    result.education_match.has_requirement && result.education_match.score < EDUCATION_GAP_SCORE
}

fn has_location_gap(result: &MatchResult) -> bool {
    let location = &result.location_match;
    !location.is_match && !location.required.trim().is_empty() && !is_remote(&location.required)
}

fn missing_skills_severity(missing: usize) -> Severity {
    match missing {
        0..=1 => Severity::Low,
        2 => Severity::Medium,
        _ => Severity::High,
    }
}

/// One entry per failing dimension: experience, skills, education, location
pub fn generate_mismatch_reasons(result: &MatchResult) -> Vec<MismatchReason> {
    let mut reasons = Vec::new();

    let experience = &result.experience_match;
    if !experience.meets_requirement {
        reasons.push(MismatchReason {
            category: MismatchCategory::Experience,
            reason: format!(
                "The job requires {} of experience, but you have {}",
                experience.required, experience.candidate
            ),
            severity: Severity::High,
            impact: "Employers often screen out applicants below the experience requirement".to_string(),
        });
    }

    let missing = &result.skills_match.missing;
    if !missing.is_empty() {
        reasons.push(MismatchReason {
            category: MismatchCategory::Skills,
            reason: format!(
                "Missing {} of the required skills: {}",
                missing.len(),
                missing.join(", ")
            ),
            severity: missing_skills_severity(missing.len()),
            impact: "Missing skills lower your skills score and may fail technical screening".to_string(),
        });
    }

    if has_education_gap(result) {
        reasons.push(MismatchReason {
            category: MismatchCategory::Education,
            reason: "Your education does not fully meet the job's stated requirements".to_string(),
            severity: Severity::Medium,
            impact: "Some employers filter applications on education".to_string(),
        });
    }

    if has_location_gap(result) {
        let candidate = match result.location_match.candidate.trim() {
            "" => "not specified",
            location => location,
        };
        reasons.push(MismatchReason {
            category: MismatchCategory::Location,
            reason: format!(
                "The job is based in {}, your location is {}",
                result.location_match.required, candidate
            ),
            severity: Severity::Medium,
            impact: "You may need to relocate or commute for this role".to_string(),
        });
    }

    reasons
}

/// Advice for each gap: skills (high), experience (medium), education (low)
pub fn generate_improvement_suggestions(result: &MatchResult) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let missing = &result.skills_match.missing;
    if !missing.is_empty() {
        suggestions.push(Suggestion {
            suggestion_type: SuggestionType::Skills,
            message: format!("Learn these skills to close the gap: {}", missing.join(", ")),
            priority: Severity::High,
        });
    }

    if !result.experience_match.meets_requirement {
        suggestions.push(Suggestion {
            suggestion_type: SuggestionType::Experience,
            message: format!(
                "Build experience through internships, freelance work or open-source projects to reach {}",
                result.experience_match.required
            ),
            priority: Severity::Medium,
        });
    }

    if has_education_gap(result) {
        suggestions.push(Suggestion {
            suggestion_type: SuggestionType::Education,
            message: "Consider certifications or courses that cover the job's education requirements".to_string(),
            priority: Severity::Low,
        });
    }

    suggestions
}
