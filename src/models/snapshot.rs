// Point-in-time system reading, per-process samples, and history points

use serde::{Deserialize, Serialize};

/// Bytes in one GB as reported on the wire (binary gigabyte).
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

/// One tick's reading. Built by the sampler, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub cpu_percent: f64,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    pub processes: Vec<ProcessSample>,
}

impl Snapshot {
    pub fn memory_used_gb(&self) -> f64 {
        self.memory_used_bytes as f64 / BYTES_PER_GB
    }

    pub fn memory_total_gb(&self) -> f64 {
        self.memory_total_bytes as f64 / BYTES_PER_GB
    }

    /// Used/total, or `None` when the total is unknown (zero).
    pub fn memory_ratio(&self) -> Option<f64> {
        if self.memory_total_bytes == 0 {
            None
        } else {
            Some(self.memory_used_bytes as f64 / self.memory_total_bytes as f64)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: u64,
    pub cpu_percent: f64,
    pub memory_used_gb: f64,
}

impl From<&Snapshot> for TimeSeriesPoint {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            timestamp: snapshot.timestamp,
            cpu_percent: snapshot.cpu_percent,
            memory_used_gb: snapshot.memory_used_gb(),
        }
    }
}
