// GET /metrics response body

use serde::{Deserialize, Serialize};

use super::{ProcessSample, Snapshot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub cpu: f64,
    pub memory: f64,
}

impl From<ProcessSample> for ProcessEntry {
    fn from(p: ProcessSample) -> Self {
        Self {
            pid: p.pid,
            name: p.name,
            cpu: p.cpu_percent,
            memory: p.memory_percent,
        }
    }
}

/// `memory_used` and `memory_total` are in GB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub cpu: f64,
    pub memory_used: f64,
    pub memory_total: f64,
    pub processes: Vec<ProcessEntry>,
}

impl MetricsResponse {
    /// Builds the body from a snapshot and its already-ranked process list.
    pub fn new(snapshot: &Snapshot, top: Vec<ProcessSample>) -> Self {
        Self {
            cpu: snapshot.cpu_percent,
            memory_used: snapshot.memory_used_gb(),
            memory_total: snapshot.memory_total_gb(),
            processes: top.into_iter().map(ProcessEntry::from).collect(),
        }
    }
}
