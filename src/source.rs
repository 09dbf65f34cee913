// Capabilities the core consumes from the OS layer

use std::time::Duration;

use crate::error::MonitorError;
use crate::models::ProcessSample;

/// A per-process entry as enumerated by the source. A process that exited while
/// the table was being read is reported as `Vanished` instead of with made-up fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessRecord {
    Present(ProcessSample),
    Vanished { pid: u32 },
}

/// Raw reading before the sampler stamps and filters it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub cpu_percent: f64,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    pub processes: Vec<ProcessRecord>,
}

/// Reads system-wide and per-process usage. `sample` blocks for `cpu_window`:
/// CPU percentages are the delta between two reads spaced by that window.
pub trait SnapshotSource: Send + Sync + 'static {
    fn sample(&self, cpu_window: Duration) -> Result<RawSample, MonitorError>;
}

/// Sends a single terminate request to a process. Does not wait for exit.
pub trait ProcessControl: Send + Sync + 'static {
    fn terminate(&self, pid: u32) -> Result<(), MonitorError>;
}
