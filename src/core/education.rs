use crate::models::{Education, EducationMatch};

/// Any of these in the job requirements means education is required
const EDUCATION_KEYWORDS: [&str; 17] = [
    "bachelor",
    "master",
    "phd",
    "diploma",
    "degree",
    "graduation",
    "btech",
    "mtech",
    "mba",
    "bca",
    "mca",
    "engineering",
    "computer science",
    "bsc",
    "msc",
    "bcom",
    "mcom",
];

/// Each boost applies when both the requirement text and a candidate
/// degree/field mention the term
const BOOST_TERMS: [&str; 3] = ["bachelor", "master", "engineering"];

const BASE_SCORE: u32 = 50;
const BOOST: u32 = 25;

/// Score candidate education against the job's requirement lines (0-100)
pub fn evaluate_education(candidate_education: &[Education], job_requirements: &[String]) -> EducationMatch {
    let requirement_text = job_requirements.join(" ").to_lowercase();

    let has_requirement = EDUCATION_KEYWORDS
        .iter()
        .any(|keyword| requirement_text.contains(keyword));

    if !has_requirement {
        return EducationMatch {
            score: 100,
            has_requirement: false,
        };
    }

    if candidate_education.is_empty() {
        return EducationMatch {
            score: 0,
            has_requirement: true,
        };
    }

    let credentials: Vec<String> = candidate_education
        .iter()
        .map(|edu| format!("{} {}", edu.degree, edu.field).to_lowercase())
        .collect();

    let boosts = BOOST_TERMS
        .iter()
        .filter(|term| requirement_text.contains(*term))
        .filter(|term| credentials.iter().any(|c| c.contains(*term)))
        .count() as u32;

    EducationMatch {
        score: (BASE_SCORE + boosts * BOOST).min(100) as u8,
        has_requirement: true,
    }
}
