use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{generate_improvement_suggestions, generate_mismatch_reasons, FitMatcher};
use crate::models::{
    ApplyCheckResponse, ErrorResponse, FitCheckRequest, FitCheckResponse, HealthResponse, MatchResult,
    MismatchReason, Suggestion,
};

/// Application state shared across all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub matcher: FitMatcher,
    pub matching: MatchingSettings,
}

/// Configure all fit-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/fit/check", web::post().to(check_fit))
        .route("/fit/apply", web::post().to(apply_check));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed for fit request: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Mismatch reasons and suggestions, only when the score is below `bar`
fn explain_below(result: &MatchResult, bar: u8) -> (Option<Vec<MismatchReason>>, Option<Vec<Suggestion>>) {
    if result.overall_score < bar {
        (
            Some(generate_mismatch_reasons(result)),
            Some(generate_improvement_suggestions(result)),
        )
    } else {
        (None, None)
    }
}

/// Compatibility check endpoint
///
/// POST /api/v1/fit/check
///
/// Request body:
/// ```json
/// {
///   "candidate": { "skills": ["React"], "resumeData": { "experience": [] }, "location": "Pune" },
///   "job": { "skills": ["React"], "experience": "1-2 years", "requirements": [], "location": "Pune" }
/// }
/// ```
async fn check_fit(
    state: web::Data<AppState>,
    req: web::Json<FitCheckRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let result = state.matcher.match_candidate_to_job(&req.candidate, &req.job);
    tracing::info!(
        "Fit check for job '{}': score={}, is_match={}",
        req.job.title,
        result.overall_score,
        result.is_match
    );

    let (mismatch_reasons, suggestions) = explain_below(&result, state.matching.good_match_threshold);

    HttpResponse::Ok().json(FitCheckResponse {
        result,
        mismatch_reasons,
        suggestions,
    })
}

/// Apply-for-job check endpoint
///
/// POST /api/v1/fit/apply
///
/// Uses the job's `minimumMatchScore` or the configured default. Candidates
/// below the minimum may still apply; the application is flagged for review.
async fn apply_check(
    state: web::Data<AppState>,
    req: web::Json<FitCheckRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let minimum_score = req
        .job
        .minimum_match_score
        .unwrap_or(state.matching.default_min_apply_score);

    let result = state.matcher.match_candidate_to_job(&req.candidate, &req.job);
    let meets_minimum = result.overall_score >= minimum_score;

    tracing::info!(
        "Apply check for job '{}': score={}, minimum={}, meets_minimum={}",
        req.job.title,
        result.overall_score,
        minimum_score,
        meets_minimum
    );

    let (mismatch_reasons, suggestions) = explain_below(&result, minimum_score);

    HttpResponse::Ok().json(ApplyCheckResponse {
        result,
        minimum_score,
        meets_minimum,
        flagged_for_review: !meets_minimum,
        mismatch_reasons,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState::default())
    }

    fn senior_job() -> Value {
        json!({
            "title": "ML Engineer",
            "skills": ["Python", "Django", "Machine Learning"],
            "experience": "5+ years",
            "location": "Bangalore, Karnataka"
        })
    }

    fn junior_candidate() -> Value {
        json!({
            "skills": ["JavaScript", "React"],
            "resumeData": { "experience": [{ "title": "Frontend Intern" }] },
            "location": "Mumbai"
        })
    }

    #[actix_web::test]
    async fn test_health_check_response() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
    }

    #[actix_web::test]
    async fn test_check_explains_low_score() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/fit/check")
            .set_json(json!({ "candidate": junior_candidate(), "job": senior_job() }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["overallScore"], 25);
        assert_eq!(body["isMatch"], false);
        assert_eq!(body["mismatchReasons"].as_array().unwrap().len(), 3);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_check_omits_reasons_for_good_match() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let job = json!({ "skills": ["React"], "experience": "1-2 years", "location": "Mumbai" });
        let req = test::TestRequest::post()
            .uri("/fit/check")
            .set_json(json!({ "candidate": junior_candidate(), "job": job }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["overallScore"], 100);
        assert!(body.get("mismatchReasons").is_none());
        assert!(body.get("suggestions").is_none());
    }

    #[actix_web::test]
    async fn test_apply_uses_default_minimum() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/fit/apply")
            .set_json(json!({ "candidate": junior_candidate(), "job": senior_job() }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["minimumScore"], 40);
        assert_eq!(body["meetsMinimum"], false);
        assert_eq!(body["flaggedForReview"], true);
        assert!(body["mismatchReasons"].is_array());
    }

    #[actix_web::test]
    async fn test_apply_uses_job_minimum() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let mut job = senior_job();
        job["minimumMatchScore"] = json!(20);
        let req = test::TestRequest::post()
            .uri("/fit/apply")
            .set_json(json!({ "candidate": junior_candidate(), "job": job }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["minimumScore"], 20);
        assert_eq!(body["meetsMinimum"], true);
        assert_eq!(body["flaggedForReview"], false);
        assert!(body.get("mismatchReasons").is_none());
    }

    #[actix_web::test]
    async fn test_rejects_out_of_range_minimum() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let mut job = senior_job();
        job["minimumMatchScore"] = json!(150);
        let req = test::TestRequest::post()
            .uri("/fit/apply")
            .set_json(json!({ "candidate": junior_candidate(), "job": job }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
