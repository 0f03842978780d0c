//! # API REST
//!
//! REST API implementation for the triage service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for wire types and `triage-core` for the engine. Both the standalone
//! `triage-api-rest` binary and the workspace runner serve [`router`].

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AssessmentReq, AssessmentRes, ChartSliceBody, ConditionSummary, HealthRes, HealthService,
    HighlightsBody, ListConditionsRes, ListSubmissionsRes, RecommendationBody, ReportBody, RiskAssessmentBody,
    SubmissionRes, SymptomAnalysisBody,
};
use triage_core::{
    Answers, AssessmentService, ConditionSlug, EngineConfig, InMemorySubmissionStore,
    SubmissionStore, TriageError,
};

/// Application state shared across REST API handlers
///
/// Holds the assessment service (with its resolved engine configuration) and the store that
/// raw submissions are recorded in.
#[derive(Clone)]
pub struct AppState {
    service: AssessmentService,
    store: Arc<dyn SubmissionStore>,
}

impl AppState {
    pub fn new(service: AssessmentService, store: Arc<dyn SubmissionStore>) -> Self {
        Self { service, store }
    }

    /// State backed by an in-memory submission store.
    pub fn in_memory(cfg: Arc<EngineConfig>) -> Self {
        Self::new(
            AssessmentService::new(cfg),
            Arc::new(InMemorySubmissionStore::new()),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_conditions,
        create_assessment,
        get_submission,
        list_user_submissions
    ),
    components(schemas(
        HealthRes,
        ConditionSummary,
        ListConditionsRes,
        AssessmentReq,
        AssessmentRes,
        ReportBody,
        RiskAssessmentBody,
        SymptomAnalysisBody,
        RecommendationBody,
        ChartSliceBody,
        HighlightsBody,
        SubmissionRes,
        ListSubmissionsRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/conditions", get(list_conditions))
        .route("/assessments/:condition", post(create_assessment))
        .route("/submissions/:id", get(get_submission))
        .route("/users/:user_id/submissions", get(list_user_submissions))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/conditions",
    responses(
        (status = 200, description = "Configured condition profiles", body = ListConditionsRes)
    )
)]
/// List the condition profiles the engine is configured with
///
/// Conditions not listed here can still be assessed; they are weighted with the fallback profile.
async fn list_conditions(State(state): State<AppState>) -> Json<ListConditionsRes> {
    let cfg = state.service.config();
    let conditions = cfg
        .profiles()
        .map(|(slug, profile)| ConditionSummary::new(slug, profile))
        .collect();
    Json(ListConditionsRes {
        conditions,
        expected_question_count: cfg.expected_question_count(),
    })
}

#[utoipa::path(
    post,
    path = "/assessments/{condition}",
    params(
        ("condition" = String, Path, description = "Condition slug, e.g. `migraine-headache`")
    ),
    request_body = AssessmentReq,
    responses(
        (status = 200, description = "Submission recorded and assessed", body = AssessmentRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Record a questionnaire submission and assess it
///
/// # Returns
/// * `Ok(Json<AssessmentRes>)` - The stored submission id together with the full report
/// * `Err((StatusCode, &str))` - Invalid condition slug or answers, or a store failure
#[axum::debug_handler]
async fn create_assessment(
    State(state): State<AppState>,
    AxumPath(condition): AxumPath<String>,
    Json(req): Json<AssessmentReq>,
) -> Result<Json<AssessmentRes>, (StatusCode, &'static str)> {
    let slug = ConditionSlug::parse(&condition).map_err(|e| {
        tracing::error!("Invalid condition {:?}: {:?}", condition, e);
        (StatusCode::BAD_REQUEST, "Invalid condition")
    })?;

    let answers = Answers::from_json_value(req.answers).map_err(|e| {
        tracing::error!("Invalid answers: {:?}", e);
        (StatusCode::BAD_REQUEST, "Invalid answers")
    })?;

    let submission = state
        .store
        .record(req.user_id, slug.as_str(), &answers)
        .map_err(|e| {
            tracing::error!("Record submission error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        })?;

    let report = state.service.evaluate(slug.as_str(), &answers);

    Ok(Json(AssessmentRes {
        submission_id: submission.id.to_string(),
        submitted_at: submission.submitted_at.to_rfc3339(),
        report: ReportBody::from(&report),
    }))
}

#[utoipa::path(
    get,
    path = "/submissions/{id}",
    params(
        ("id" = String, Path, description = "Submission UUID")
    ),
    responses(
        (status = 200, description = "Stored submission", body = SubmissionRes),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Submission not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Fetch a previously recorded submission
async fn get_submission(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<SubmissionRes>, (StatusCode, &'static str)> {
    let id = uuid::Uuid::parse_str(&id).map_err(|e| {
        tracing::error!("Invalid submission id {:?}: {:?}", id, e);
        (StatusCode::BAD_REQUEST, "Invalid submission id")
    })?;

    let submission = match state.store.get(id) {
        Ok(submission) => submission,
        Err(TriageError::SubmissionNotFound(_)) => {
            return Err((StatusCode::NOT_FOUND, "Submission not found"));
        }
        Err(e) => {
            tracing::error!("Get submission error: {:?}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
        }
    };

    SubmissionRes::from_submission(&submission)
        .map(Json)
        .map_err(|e| {
            tracing::error!("Encode submission error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        })
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/submissions",
    params(
        ("user_id" = String, Path, description = "User the submissions were filed under")
    ),
    responses(
        (status = 200, description = "Submissions for the user, oldest first", body = ListSubmissionsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List every submission recorded for a user
async fn list_user_submissions(
    State(state): State<AppState>,
    AxumPath(user_id): AxumPath<String>,
) -> Result<Json<ListSubmissionsRes>, (StatusCode, &'static str)> {
    let stored = state.store.list_for_user(&user_id).map_err(|e| {
        tracing::error!("List submissions error: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    })?;

    let submissions = stored
        .iter()
        .map(SubmissionRes::from_submission)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!("Encode submission error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        })?;

    Ok(Json(ListSubmissionsRes { submissions }))
}
