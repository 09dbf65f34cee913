// Handlers: version, metrics, terminate, history, alerts

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::MonitorError;
use crate::models::{MetricsResponse, StatusMessage};
use crate::ranker::rank;
use crate::version::{NAME, VERSION};

/// Maps a failure kind to its transport status and `{status, message}` body.
fn error_response(e: &MonitorError) -> Response {
    let status = match e {
        MonitorError::ProcessNotFound(_) => StatusCode::NOT_FOUND,
        MonitorError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        MonitorError::TerminationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(StatusMessage::error(e.to_string()))).into_response()
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /metrics — samples now (blocks for one CPU window) and returns the top processes.
/// Does not touch the history store.
pub(super) async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.sampler.collect().await {
        Ok(snapshot) => {
            let top = rank(&snapshot.processes, state.config.sampling.top_k);
            Json(MetricsResponse::new(&snapshot, top)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, operation = "collect", "metrics request failed");
            error_response(&e)
        }
    }
}

/// POST /terminate/{pid} — 200 on signal sent, 404 if no such process, 500 otherwise.
/// A pid that is not a non-negative integer cannot name a process and is also 404.
pub(super) async fn terminate_handler(
    State(state): State<AppState>,
    pid: Result<Path<u32>, PathRejection>,
) -> Response {
    let pid = match pid {
        Ok(Path(pid)) => pid,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "terminate: unparsable pid");
            return (
                StatusCode::NOT_FOUND,
                Json(StatusMessage::error(MonitorError::ProcessNotFound(0).to_string())),
            )
                .into_response();
        }
    };
    match state.terminator.terminate(pid).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(&e),
    }
}

/// GET /history — recorded CPU/memory points, oldest first.
pub(super) async fn history_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.snapshot_all())
}

/// GET /alerts — recent alerts, newest first.
pub(super) async fn alerts_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.alert_log.recent())
}
