// On-demand snapshot collection

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::MonitorError;
use crate::models::{ProcessSample, Snapshot};
use crate::source::{ProcessRecord, SnapshotSource};

/// Default CPU measurement window.
pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_secs(1);

/// Turns raw source readings into immutable [`Snapshot`]s.
///
/// Holds no mutable state, so `collect` may be called from many requests at once.
/// Every call blocks a worker thread for one CPU window.
#[derive(Clone)]
pub struct Sampler {
    source: Arc<dyn SnapshotSource>,
    cpu_window: Duration,
}

impl Sampler {
    pub fn new(source: Arc<dyn SnapshotSource>, cpu_window: Duration) -> Self {
        Self { source, cpu_window }
    }

    pub fn cpu_window(&self) -> Duration {
        self.cpu_window
    }

    #[instrument(skip(self), fields(operation = "collect", cpu_window_ms = self.cpu_window.as_millis() as u64))]
    pub async fn collect(&self) -> Result<Snapshot, MonitorError> {
        let source = self.source.clone();
        let window = self.cpu_window;
        let raw = tokio::task::spawn_blocking(move || source.sample(window))
            .await
            .map_err(|e| MonitorError::SourceUnavailable(format!("sampler task join: {e}")))??;

        let mut vanished = 0usize;
        let processes: Vec<ProcessSample> = raw
            .processes
            .into_iter()
            .filter_map(|record| match record {
                ProcessRecord::Present(p) => Some(sanitize(p)),
                ProcessRecord::Vanished { .. } => {
                    vanished += 1;
                    None
                }
            })
            .collect();
        if vanished > 0 {
            debug!(vanished, "dropped processes that exited during enumeration");
        }

        Ok(Snapshot {
            timestamp: now_millis(),
            cpu_percent: finite_or_zero(raw.cpu_percent).clamp(0.0, 100.0),
            memory_used_bytes: raw.memory_used_bytes.min(raw.memory_total_bytes),
            memory_total_bytes: raw.memory_total_bytes,
            processes,
        })
    }
}

fn sanitize(mut p: ProcessSample) -> ProcessSample {
    p.cpu_percent = finite_or_zero(p.cpu_percent).max(0.0);
    p.memory_percent = finite_or_zero(p.memory_percent).max(0.0);
    p
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Milliseconds since the Unix epoch; 0 if the clock is before the epoch.
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                operation = "get_timestamp",
                "system time error"
            );
            0
        })
}
