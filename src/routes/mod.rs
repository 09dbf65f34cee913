// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::history::{AlertLog, TimeSeriesStore};
use crate::sampler::Sampler;
use crate::terminate::TerminationHandler;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) sampler: Sampler,
    pub(crate) terminator: TerminationHandler,
    pub(crate) store: Arc<TimeSeriesStore>,
    pub(crate) alert_log: Arc<AlertLog>,
    pub(crate) config: AppConfig,
}

pub fn app(
    sampler: Sampler,
    terminator: TerminationHandler,
    store: Arc<TimeSeriesStore>,
    alert_log: Arc<AlertLog>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        sampler,
        terminator,
        store,
        alert_log,
        config,
    };
    Router::new()
        .route("/", get(|| async { "hostwatch: system monitor is running" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/metrics", get(http::metrics_handler)) // GET /metrics
        .route("/terminate/{pid}", post(http::terminate_handler)) // POST /terminate/{pid}
        .route("/history", get(http::history_handler)) // GET /history
        .route("/alerts", get(http::alerts_handler)) // GET /alerts
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
