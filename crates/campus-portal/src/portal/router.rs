use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::json;

use super::insight::InteractionRecord;
use super::repository::{ContentStore, ExplainError, ExplanationProvider, InteractionStore};
use super::service::{PortalService, PortalServiceError};
use super::visibility::ViewerProfile;

const DEFAULT_CLARITY_WINDOW_DAYS: i64 = 30;

/// Upper bound on the dashboard window. Values beyond this overflow the
/// duration arithmetic, and no deployment retains ten years of interactions.
pub const MAX_CLARITY_WINDOW_DAYS: i64 = 3650;

/// Router builder exposing the portal's HTTP surface. Role gating happens in
/// the session layer upstream; these handlers trust the supplied viewer.
pub fn portal_router<I, C, E>(service: Arc<PortalService<I, C, E>>) -> Router
where
    I: InteractionStore + 'static,
    C: ContentStore + 'static,
    E: ExplanationProvider + 'static,
{
    Router::new()
        .route("/api/v1/interactions", post(record_interaction_handler::<I, C, E>))
        .route(
            "/api/v1/dashboard/clarity",
            get(clarity_dashboard_handler::<I, C, E>),
        )
        .route("/api/v1/feed", get(student_feed_handler::<I, C, E>))
        .route("/api/v1/assistant/explain", post(explain_handler::<I, C, E>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClarityParams {
    pub(crate) window_days: Option<i64>,
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedParams {
    pub(crate) department_id: String,
    #[serde(default)]
    pub(crate) hosteller: bool,
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExplainRequest {
    pub(crate) question: String,
}

pub(crate) async fn record_interaction_handler<I, C, E>(
    State(service): State<Arc<PortalService<I, C, E>>>,
    axum::Json(interaction): axum::Json<InteractionRecord>,
) -> Response
where
    I: InteractionStore + 'static,
    C: ContentStore + 'static,
    E: ExplanationProvider + 'static,
{
    let domain_tag = interaction.domain_tag.clone();
    match service.record_interaction(interaction) {
        Ok(()) => {
            let payload = json!({
                "status": "recorded",
                "domain": domain_tag,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn clarity_dashboard_handler<I, C, E>(
    State(service): State<Arc<PortalService<I, C, E>>>,
    Query(params): Query<ClarityParams>,
) -> Response
where
    I: InteractionStore + 'static,
    C: ContentStore + 'static,
    E: ExplanationProvider + 'static,
{
    let window_days = params
        .window_days
        .unwrap_or(DEFAULT_CLARITY_WINDOW_DAYS)
        .clamp(1, MAX_CLARITY_WINDOW_DAYS);
    let as_of = params.as_of.unwrap_or_else(Utc::now);
    let since = as_of - Duration::days(window_days);

    match service.clarity_report(since) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn student_feed_handler<I, C, E>(
    State(service): State<Arc<PortalService<I, C, E>>>,
    Query(params): Query<FeedParams>,
) -> Response
where
    I: InteractionStore + 'static,
    C: ContentStore + 'static,
    E: ExplanationProvider + 'static,
{
    let viewer = ViewerProfile {
        department_id: params.department_id,
        is_hosteller: params.hosteller,
    };
    let as_of = params.as_of.unwrap_or_else(Utc::now);

    match service.student_feed(&viewer, as_of) {
        Ok(feed) => (StatusCode::OK, axum::Json(feed)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn explain_handler<I, C, E>(
    State(service): State<Arc<PortalService<I, C, E>>>,
    axum::Json(request): axum::Json<ExplainRequest>,
) -> Response
where
    I: InteractionStore + 'static,
    C: ContentStore + 'static,
    E: ExplanationProvider + 'static,
{
    match service.explain(&request.question) {
        Ok(answer) => {
            let payload = json!({ "answer": answer });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: PortalServiceError) -> Response {
    let status = match &err {
        PortalServiceError::Explain(ExplainError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        PortalServiceError::Explain(ExplainError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
        PortalServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
