// Domain models: snapshots, history points, alerts, status bodies

mod alert;
mod snapshot;
mod status;
mod wire;

pub use alert::{AlertEvent, AlertKind};
pub use snapshot::{BYTES_PER_GB, ProcessSample, Snapshot, TimeSeriesPoint};
pub use status::{ResponseStatus, StatusMessage, TerminationResult, TerminationStatus};
pub use wire::{MetricsResponse, ProcessEntry};
