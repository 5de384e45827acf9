use crate::core::matcher::MatchError;
use crate::models::ExperienceMatch;

/// Each missing year of experience costs this many points
const PENALTY_PER_YEAR: u32 = 30;

const ZERO_EXPERIENCE_MARKERS: [&str; 4] = ["fresh", "fresher", "entry level", "0 year"];

/// Parse a free-text experience string into a year count
///
/// "Fresh graduate", "entry level" and "0 years" parse to 0. Otherwise the
/// first run of digits wins ("1-2 years" -> 1, "3+ years" -> 3), and text
/// without digits parses to 0.
pub fn parse_experience(text: &str) -> Result<u32, MatchError> {
    let lower = text.to_lowercase();
    if ZERO_EXPERIENCE_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return Ok(0);
    }

    let digits: String = lower
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return Ok(0);
    }

    digits
        .parse::<u32>()
        .map_err(|_| MatchError::ExperienceOutOfRange(text.to_string()))
}

/// Score the candidate's experience against the job requirement (0-100)
pub fn evaluate_experience(
    job_requirement: &str,
    candidate_years: u32,
) -> Result<ExperienceMatch, MatchError> {
    let required = parse_experience(job_requirement)?;

    let meets_requirement = candidate_years >= required;
    let score: u8 = if meets_requirement {
        100
    } else {
        let penalty = (required - candidate_years).saturating_mul(PENALTY_PER_YEAR);
        // Bounded by 100 after the saturating subtraction
        u8::try_from(100u32.saturating_sub(penalty)).unwrap_or(0)
    };

    let required_text = if job_requirement.trim().is_empty() {
        "Not specified".to_string()
    } else {
        job_requirement.to_string()
    };

    Ok(ExperienceMatch {
        score,
        required: required_text,
        candidate: format!("{} years", candidate_years),
        meets_requirement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_number() {
        assert_eq!(parse_experience("1-2 years").unwrap(), 1);
        assert_eq!(parse_experience("3+ years").unwrap(), 3);
        assert_eq!(parse_experience("At least 10 years, ideally 12").unwrap(), 10);
    }

    #[test]
    fn test_parse_fresh_markers() {
        assert_eq!(parse_experience("Fresh graduate").unwrap(), 0);
        assert_eq!(parse_experience("Freshers welcome, 2 years preferred").unwrap(), 0);
        assert_eq!(parse_experience("Entry Level").unwrap(), 0);
        assert_eq!(parse_experience("0 years").unwrap(), 0);
    }

    #[test]
    fn test_parse_without_digits() {
        assert_eq!(parse_experience("").unwrap(), 0);
        assert_eq!(parse_experience("some experience").unwrap(), 0);
    }

    #[test]
    fn test_parse_overflow_is_error() {
        let err = parse_experience("99999999999999999999 years").unwrap_err();
        assert!(matches!(err, MatchError::ExperienceOutOfRange(_)));
    }

    #[test]
    fn test_meets_requirement() {
        let result = evaluate_experience("1-2 years", 1).unwrap();
        assert_eq!(result.score, 100);
        assert!(result.meets_requirement);
        assert_eq!(result.required, "1-2 years");
        assert_eq!(result.candidate, "1 years");
    }

    #[test]
    fn test_penalty_per_missing_year() {
        assert_eq!(evaluate_experience("3+ years", 1).unwrap().score, 40);
        assert_eq!(evaluate_experience("3+ years", 0).unwrap().score, 10);
        assert_eq!(evaluate_experience("5+ years", 1).unwrap().score, 0);
    }

    #[test]
    fn test_round_decade_years_count_in_full() {
        for years in [10, 20, 30, 100] {
            let result = evaluate_experience("5+ years", years).unwrap();
            assert_eq!(result.score, 100, "{} years", years);
            assert!(result.meets_requirement);
            assert_eq!(result.candidate, format!("{} years", years));
        }
        assert_eq!(evaluate_experience("12+ years", 10).unwrap().score, 40);
    }

    #[test]
    fn test_empty_requirement_always_matches() {
        let result = evaluate_experience("", 0).unwrap();
        assert_eq!(result.score, 100);
        assert!(result.meets_requirement);
        assert_eq!(result.required, "Not specified");
    }
}
