// Threshold rules evaluated against each fresh snapshot

use crate::models::{AlertEvent, AlertKind, Snapshot};

pub const DEFAULT_CPU_THRESHOLD: f64 = 80.0;
pub const DEFAULT_MEMORY_THRESHOLD: f64 = 0.9;

pub const MEMORY_ALERT_MESSAGE: &str = "High Memory usage!";

/// Stateless rule set. Every snapshot over a threshold yields a fresh event;
/// nothing is deduplicated across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertRules {
    /// Percent; fires on strictly greater.
    pub cpu_threshold: f64,
    /// Used/total fraction; fires on strictly greater.
    pub memory_threshold: f64,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self {
            cpu_threshold: DEFAULT_CPU_THRESHOLD,
            memory_threshold: DEFAULT_MEMORY_THRESHOLD,
        }
    }
}

impl AlertRules {
    /// CPU alert first, then memory, when both fire.
    pub fn evaluate(&self, snapshot: &Snapshot) -> Vec<AlertEvent> {
        let mut events = Vec::new();
        if snapshot.cpu_percent > self.cpu_threshold {
            events.push(AlertEvent {
                timestamp: snapshot.timestamp,
                message: format!("High CPU usage: {}%", snapshot.cpu_percent),
                severity: AlertKind::Cpu,
            });
        }
        if snapshot
            .memory_ratio()
            .is_some_and(|ratio| ratio > self.memory_threshold)
        {
            events.push(AlertEvent {
                timestamp: snapshot.timestamp,
                message: MEMORY_ALERT_MESSAGE.to_string(),
                severity: AlertKind::Memory,
            });
        }
        events
    }
}
