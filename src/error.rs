// Failure kinds surfaced by the sampling and termination paths

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// System-wide stats could not be read; fatal for the current request.
    #[error("snapshot source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Process not found")]
    ProcessNotFound(u32),

    /// Carries the OS-level cause verbatim; it becomes the HTTP 500 message.
    #[error("{message}")]
    TerminationFailed { pid: u32, message: String },
}
