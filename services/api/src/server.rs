use crate::cli::ServeArgs;
use crate::infra::{
    AppState, CannedExplanationProvider, InMemoryContentStore, InMemoryInteractionStore,
};
use crate::routes::with_portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use campus_portal::config::AppConfig;
use campus_portal::error::AppError;
use campus_portal::portal::PortalService;
use campus_portal::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let interactions = Arc::new(InMemoryInteractionStore::default());
    let catalog = Arc::new(InMemoryContentStore::default());
    let portal_service = Arc::new(PortalService::new(
        interactions,
        catalog,
        Arc::new(CannedExplanationProvider),
    ));

    let app = with_portal_routes(portal_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "campus portal service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
