// Process termination command path

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::MonitorError;
use crate::models::TerminationResult;
use crate::source::ProcessControl;

/// Issues exactly one terminate request per call. Does not retry and does not
/// wait for the target to exit.
#[derive(Clone)]
pub struct TerminationHandler {
    control: Arc<dyn ProcessControl>,
}

impl TerminationHandler {
    pub fn new(control: Arc<dyn ProcessControl>) -> Self {
        Self { control }
    }

    /// pid 0 is rejected as not found: on Unix it would address the caller's process group.
    #[instrument(skip(self), fields(operation = "terminate"))]
    pub async fn terminate(&self, pid: u32) -> Result<TerminationResult, MonitorError> {
        if pid == 0 {
            return Err(MonitorError::ProcessNotFound(pid));
        }
        let control = self.control.clone();
        let result = tokio::task::spawn_blocking(move || control.terminate(pid))
            .await
            .map_err(|e| MonitorError::TerminationFailed {
                pid,
                message: format!("terminate task join: {e}"),
            })?;

        match result {
            Ok(()) => {
                info!(pid, "terminate signal sent");
                Ok(TerminationResult::success(format!("Process {pid} terminated")))
            }
            Err(e) => {
                match &e {
                    MonitorError::ProcessNotFound(_) => info!(pid, "terminate target not found"),
                    _ => warn!(pid, error = %e, "terminate failed"),
                }
                Err(e)
            }
        }
    }
}
