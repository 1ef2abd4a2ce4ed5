use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeaveSource};
use crate::routes::with_leave_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use campus_leave::config::AppConfig;
use campus_leave::error::AppError;
use campus_leave::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(snapshot) = args.snapshot.take() {
        config.leave.snapshot_path = Some(snapshot);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = match config.leave.snapshot_path.as_deref() {
        Some(path) => InMemoryLeaveSource::from_path(path)?,
        None => {
            warn!("no leave snapshot configured; listing routes will answer 404");
            InMemoryLeaveSource::default()
        }
    };

    let app = with_leave_routes(Arc::new(source))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "campus leave service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
