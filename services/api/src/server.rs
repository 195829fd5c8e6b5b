use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredBridge};
use crate::routes::with_forecast_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_forecast::config::AppConfig;
use job_forecast::error::AppError;
use job_forecast::forecast::{ForecastEngine, ForecastService};
use job_forecast::telemetry;
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

    let bridge = Arc::new(ConfiguredBridge::from_config(&config.model));
    let engine = ForecastEngine::default().with_policy(config.forecast.growth_policy);
    let forecast_service = Arc::new(ForecastService::new(engine, bridge));

    let app = with_forecast_routes(forecast_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model_enabled = config.model.enabled,
        growth_policy = ?config.forecast.growth_policy,
        "job demand forecast service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
