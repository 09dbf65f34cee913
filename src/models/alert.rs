// Threshold alert events

use serde::{Deserialize, Serialize};

/// Which rule produced an alert; serializes to lowercase JSON ("cpu", "memory").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Cpu,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub timestamp: u64,
    pub message: String,
    pub severity: AlertKind,
}
