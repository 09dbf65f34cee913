// Shared test helpers: scripted sources and snapshot builders

#![allow(dead_code)]

use hostwatch::error::MonitorError;
use hostwatch::models::*;
use hostwatch::source::{ProcessControl, ProcessRecord, RawSample, SnapshotSource};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const GB: u64 = 1024 * 1024 * 1024;

pub fn process(pid: u32, name: &str, cpu: f64, memory: f64) -> ProcessSample {
    ProcessSample {
        pid,
        name: name.into(),
        cpu_percent: cpu,
        memory_percent: memory,
    }
}

pub fn snapshot(cpu: f64, used: u64, total: u64) -> Snapshot {
    Snapshot {
        timestamp: 1_000,
        cpu_percent: cpu,
        memory_used_bytes: used,
        memory_total_bytes: total,
        processes: vec![],
    }
}

/// Returns the same reading on every call and remembers the windows it was asked for.
pub struct FakeSource {
    pub sample: RawSample,
    pub windows: Mutex<Vec<Duration>>,
}

impl FakeSource {
    pub fn new(sample: RawSample) -> Self {
        Self {
            sample,
            windows: Mutex::new(Vec::new()),
        }
    }

    pub fn with_processes(cpu: f64, used: u64, total: u64, processes: Vec<ProcessRecord>) -> Self {
        Self::new(RawSample {
            cpu_percent: cpu,
            memory_used_bytes: used,
            memory_total_bytes: total,
            processes,
        })
    }

    pub fn calls(&self) -> usize {
        self.windows.lock().unwrap().len()
    }
}

impl SnapshotSource for FakeSource {
    fn sample(&self, cpu_window: Duration) -> Result<RawSample, MonitorError> {
        self.windows.lock().unwrap().push(cpu_window);
        Ok(self.sample.clone())
    }
}

/// Always fails as if system-wide stats were unreadable.
pub struct UnavailableSource;

impl SnapshotSource for UnavailableSource {
    fn sample(&self, _cpu_window: Duration) -> Result<RawSample, MonitorError> {
        Err(MonitorError::SourceUnavailable("stats unreadable".into()))
    }
}

/// Knows a fixed set of live pids; `denied` pids exist but refuse the signal.
pub struct FakeControl {
    pub live: HashSet<u32>,
    pub denied: HashSet<u32>,
    pub signals_sent: AtomicUsize,
}

impl FakeControl {
    pub fn new(live: &[u32], denied: &[u32]) -> Self {
        Self {
            live: live.iter().copied().collect(),
            denied: denied.iter().copied().collect(),
            signals_sent: AtomicUsize::new(0),
        }
    }

    pub fn signals(&self) -> usize {
        self.signals_sent.load(Ordering::SeqCst)
    }
}

impl ProcessControl for FakeControl {
    fn terminate(&self, pid: u32) -> Result<(), MonitorError> {
        if !self.live.contains(&pid) && !self.denied.contains(&pid) {
            return Err(MonitorError::ProcessNotFound(pid));
        }
        self.signals_sent.fetch_add(1, Ordering::SeqCst);
        if self.denied.contains(&pid) {
            return Err(MonitorError::TerminationFailed {
                pid,
                message: "Operation not permitted (os error 1)".into(),
            });
        }
        Ok(())
    }
}
