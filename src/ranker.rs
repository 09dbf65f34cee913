// Top-K process selection

use crate::models::ProcessSample;

/// Processes returned by GET /metrics.
pub const DEFAULT_TOP_K: usize = 10;

/// Returns the `k` processes with the highest CPU usage, highest first.
///
/// The sort is stable: processes with equal CPU keep their input order.
pub fn rank(processes: &[ProcessSample], k: usize) -> Vec<ProcessSample> {
    let mut ranked = processes.to_vec();
    ranked.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
    ranked.truncate(k);
    ranked
}
