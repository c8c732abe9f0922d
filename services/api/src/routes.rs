use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use campus_portal::portal::{
    portal_router, ContentStore, ExplanationProvider, InteractionStore, PortalService,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_portal_routes<I, C, E>(service: Arc<PortalService<I, C, E>>) -> axum::Router
where
    I: InteractionStore + 'static,
    C: ContentStore + 'static,
    E: ExplanationProvider + 'static,
{
    portal_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct ServiceStatus {
    pub(crate) status: &'static str,
}

pub(crate) async fn healthcheck() -> Json<ServiceStatus> {
    Json(ServiceStatus { status: "ok" })
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
