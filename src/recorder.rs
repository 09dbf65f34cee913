// Background recorder: samples on a fixed interval, appends one history point per tick
// and feeds every alert the rules produce into the alert log.
// GET /metrics samples independently and never writes here.

use crate::alerts::AlertRules;
use crate::history::{AlertLog, TimeSeriesStore};
use crate::models::TimeSeriesPoint;
use crate::sampler::Sampler;
use std::sync::Arc;
use tokio::time::{Duration, interval};
use tracing::Instrument;

/// Shared state and shutdown for the recorder.
pub struct RecorderDeps {
    pub sampler: Sampler,
    pub store: Arc<TimeSeriesStore>,
    pub alert_log: Arc<AlertLog>,
    pub rules: AlertRules,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Runs one tick: collect, append, evaluate. Returns the number of alerts raised.
pub async fn record_tick(
    sampler: &Sampler,
    store: &TimeSeriesStore,
    alert_log: &AlertLog,
    rules: &AlertRules,
) -> Result<usize, crate::error::MonitorError> {
    let snapshot = sampler.collect().await?;
    store.append(TimeSeriesPoint::from(&snapshot));
    let events = rules.evaluate(&snapshot);
    let raised = events.len();
    for event in events {
        tracing::debug!(severity = ?event.severity, message = %event.message, "alert raised");
        alert_log.record(event);
    }
    tracing::debug!(
        operation = "record_tick",
        cpu_percent = snapshot.cpu_percent,
        processes = snapshot.processes.len(),
        alerts = raised,
        "history point recorded"
    );
    Ok(raised)
}

pub fn spawn(deps: RecorderDeps, interval_ms: u64) -> tokio::task::JoinHandle<()> {
    let RecorderDeps {
        sampler,
        store,
        alert_log,
        rules,
        mut shutdown_rx,
    } = deps;

    let recorder_span = tracing::span!(tracing::Level::DEBUG, "recorder", interval_ms);
    tokio::spawn(
        async move {
            let mut tick = interval(Duration::from_millis(interval_ms));
            // A tick can outlast the interval (CPU window); don't burst to catch up.
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if let Err(e) = record_tick(&sampler, &store, &alert_log, &rules).await {
                            tracing::warn!(
                                error = %e,
                                operation = "record_tick",
                                "recorder tick failed"
                            );
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Recorder shutting down");
                        break;
                    }
                }
            }
        }
        .instrument(recorder_span),
    )
}
