//! HTTP API: simulation, metadata, probes, and Prometheus metrics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use serde_json::json;
use sim_lib::{InsightGenerator, SimulationError, Simulator, WorkloadRequest};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::health::health_report;
use crate::metrics::ApiMetrics;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub simulator: Arc<Simulator>,
    pub insights: Arc<dyn InsightGenerator>,
    pub insight_timeout: Duration,
    pub metrics: ApiMetrics,
}

impl AppState {
    pub fn new(
        simulator: Arc<Simulator>,
        insights: Arc<dyn InsightGenerator>,
        insight_timeout: Duration,
        metrics: ApiMetrics,
    ) -> Self {
        Self {
            simulator,
            insights,
            insight_timeout,
            metrics,
        }
    }
}

/// Simulation errors mapped onto HTTP statuses
struct ApiError(SimulationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SimulationError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Run a carbon/cost simulation and attach narrative insights
async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WorkloadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let started = Instant::now();

    let mut outcome = match state.simulator.run(&request) {
        Ok(outcome) => outcome,
        Err(err) => {
            state.metrics.record_simulation_error();
            return Err(ApiError(err));
        }
    };

    state
        .metrics
        .observe_simulation_latency(started.elapsed().as_secs_f64());
    state.metrics.record_simulation(outcome.skipped_regions.len());

    // The insight call is best-effort: timeout or failure ships the
    // response without a narrative.
    match tokio::time::timeout(state.insight_timeout, state.insights.generate(&outcome)).await {
        Ok(Ok(text)) => {
            outcome.insights = Some(text);
            outcome.insights_provider = Some(state.insights.provider().to_string());
        }
        Ok(Err(err)) => {
            state.metrics.record_insight_failure();
            warn!(error = %err, "insight generation failed");
        }
        Err(_) => {
            state.metrics.record_insight_failure();
            warn!("insight generation timed out");
        }
    }

    info!(
        current_region = %outcome.current_region_result.region_code,
        recommended_region = %outcome.recommended_region.region_code,
        "simulation served"
    );
    Ok(Json(outcome))
}

/// Available instance types, regions, and providers
async fn metadata(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.simulator.metadata())
}

/// Liveness probe
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let report = health_report(&state.simulator.metadata(), state.insights.provider());
    let status_code = if report.ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(report))
}

/// Readiness probe
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let report = health_report(&state.simulator.metadata(), state.insights.provider());
    let status_code = if report.ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(json!({ "ready": report.ready() })))
}

/// Prometheus metrics exposition
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        warn!(error = %err, "failed to encode metrics");
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/simulate", post(simulate))
        .route("/api/v1/metadata", get(metadata))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
