use crate::models::LocationMatch;

/// Whether a job location is location-agnostic
#[inline]
pub fn is_remote(location: &str) -> bool {
    let lower = location.to_lowercase();
    lower.contains("remote") || lower.contains("work from home")
}

/// Coarse bidirectional substring test between candidate and job location
///
/// An empty candidate location is a substring of every job location and
/// therefore matches.
pub fn evaluate_location(candidate_location: &str, job_location: &str) -> LocationMatch {
    let candidate_lower = candidate_location.to_lowercase();
    let job_lower = job_location.to_lowercase();

    let is_match = job_location.trim().is_empty()
        || is_remote(job_location)
        || candidate_lower.contains(&job_lower)
        || job_lower.contains(&candidate_lower);

    LocationMatch {
        is_match,
        required: job_location.to_string(),
        candidate: candidate_location.to_string(),
    }
}
