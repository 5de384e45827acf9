use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// Candidate profile as supplied by the caller
///
/// Every field is optional on the wire; missing values fall back to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub resume_data: ResumeData,
    pub education: Vec<Education>,
    pub location: Option<String>,
}

impl CandidateProfile {
    /// Union of the primary skill list and the resume skill list.
    ///
    /// Entries are trimmed, blanks dropped, and duplicates removed
    /// case-insensitively, keeping the first spelling seen.
    pub fn all_skills(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.skills
            .iter()
            .chain(self.resume_data.skills.iter())
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .filter(|skill| seen.insert(skill.to_lowercase()))
            .map(str::to_string)
            .collect()
    }

    /// Coarse experience proxy: one year per work-experience entry
    pub fn experience_years(&self) -> u32 {
        u32::try_from(self.resume_data.experience.len()).unwrap_or(u32::MAX)
    }

    /// Helper to get the location, defaulting to empty
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub skills: Vec<String>,
    pub experience: Vec<WorkExperience>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
}

/// Job posting as supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub title: String,
    #[serde(alias = "skills")]
    pub required_skills: Vec<String>,
    #[serde(alias = "experienceRequirement")]
    pub experience: Option<String>,
    pub requirements: Vec<String>,
    pub location: Option<String>,
    /// Per-job minimum score used by the apply flow
    #[validate(range(max = 100))]
    pub minimum_match_score: Option<u8>,
}

impl JobPosting {
    /// Helper to get the experience requirement, defaulting to empty
    pub fn experience(&self) -> &str {
        self.experience.as_deref().unwrap_or("")
    }

    /// Helper to get the location, defaulting to empty
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Required skills with blank entries removed, in posting order
    ///
    /// Non-blank entries keep their original spelling, surrounding
    /// whitespace included.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.required_skills
            .iter()
            .map(String::as_str)
            .filter(|skill| !skill.trim().is_empty())
    }
}

/// Full outcome of one candidate/job evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub overall_score: u8,
    pub is_match: bool,
    pub experience_match: ExperienceMatch,
    pub skills_match: SkillsMatch,
    pub education_match: EducationMatch,
    pub location_match: LocationMatch,
    pub feedback: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub score: u8,
    /// Original job requirement text, or "Not specified"
    pub required: String,
    /// Rendered as "<N> years"
    pub candidate: String,
    #[serde(rename = "match")]
    pub meets_requirement: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsMatch {
    pub score: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationMatch {
    pub score: u8,
    pub has_requirement: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMatch {
    #[serde(rename = "match")]
    pub is_match: bool,
    pub required: String,
    pub candidate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchCategory {
    Experience,
    Skills,
    Education,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Structured explanation of one failing dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchReason {
    pub category: MismatchCategory,
    pub reason: String,
    pub severity: Severity,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Skills,
    Experience,
    Education,
}

/// Actionable advice for closing one gap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub message: String,
    pub priority: Severity,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub experience: f64,
    pub skills: f64,
    pub education: f64,
    pub location: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.experience + self.skills + self.education + self.location
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            experience: 0.35,
            skills: 0.35,
            education: 0.20,
            location: 0.10,
        }
    }
}
