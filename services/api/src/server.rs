use crate::cli::ServeArgs;
use crate::infra::{AppState, AuditState};
use crate::routes;
use axum_prometheus::PrometheusMetricLayer;
use complysmart::audit::AuditApiClient;
use complysmart::config::AppConfig;
use complysmart::error::AppError;
use complysmart::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let client = AuditApiClient::new(&config.audit_api)?;
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        audit: AuditState::new(client),
    };

    let app = routes::router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        audit_api = %config.audit_api.base_url,
        "compliance dashboard service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
