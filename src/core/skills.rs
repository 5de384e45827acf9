use crate::models::SkillsMatch;

/// Partial match in either direction, case-insensitive.
///
/// "React" matches "React.js" and vice versa. "Java" also matches
/// "JavaScript"; callers depend on that.
#[inline]
fn skills_overlap(job_skill: &str, candidate_skill: &str) -> bool {
    job_skill.contains(candidate_skill) || candidate_skill.contains(job_skill)
}

/// Score candidate skills against the job's required skills (0-100)
///
/// `matched` and `missing` keep the job's original spelling and order.
pub fn evaluate_skills<S: AsRef<str>>(candidate_skills: &[S], job_skills: &[&str]) -> SkillsMatch {
    if job_skills.is_empty() {
        return SkillsMatch {
            score: 100,
            matched: vec![],
            missing: vec![],
        };
    }

    if candidate_skills.is_empty() {
        return SkillsMatch {
            score: 0,
            matched: vec![],
            missing: job_skills.iter().map(|s| s.to_string()).collect(),
        };
    }

    let candidate_lower: Vec<String> = candidate_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let (matched, missing): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .map(|s| s.to_string())
        .partition(|job_skill| {
            let job_lower = job_skill.to_lowercase();
            candidate_lower
                .iter()
                .any(|candidate| skills_overlap(&job_lower, candidate))
        });

    let score = (matched.len() as f64 * 100.0 / job_skills.len() as f64).round() as u8;

    SkillsMatch {
        score,
        matched,
        missing,
    }
}
