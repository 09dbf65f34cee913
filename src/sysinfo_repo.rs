// System and process stats via sysinfo

use std::sync::Mutex;
use std::time::Duration;
use sysinfo::{Pid, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, Signal, System};
use tracing::instrument;

use crate::error::MonitorError;
use crate::models::ProcessSample;
use crate::source::{ProcessControl, ProcessRecord, RawSample, SnapshotSource};

/// Production source backed by `sysinfo`.
///
/// Each `sample` call measures with its own `System`, so concurrent callers never
/// share a CPU baseline or wait on each other. Termination keeps one handle.
pub struct SysinfoRepo {
    control: Mutex<System>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        Self {
            control: Mutex::new(System::new()),
        }
    }
}

/// `ESRCH`: the target exited before the signal was delivered (same value on Linux, macOS and the BSDs).
const ESRCH: i32 = 3;

/// Maps the OS error left by a failed kill to a failure kind. A target that
/// exited in the meantime is not found; anything else is a termination failure.
pub fn kill_failure(pid: u32, cause: &std::io::Error) -> MonitorError {
    if cfg!(unix) && cause.raw_os_error() == Some(ESRCH) {
        return MonitorError::ProcessNotFound(pid);
    }
    MonitorError::TerminationFailed {
        pid,
        message: format!("Failed to terminate PID {pid}: {cause}"),
    }
}

fn refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing().with_cpu().with_memory()
}

impl SnapshotSource for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "sample"))]
    fn sample(&self, cpu_window: Duration) -> Result<RawSample, MonitorError> {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind());
        std::thread::sleep(cpu_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu_all();
        sys.refresh_memory();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind());

        if sys.cpus().is_empty() {
            return Err(MonitorError::SourceUnavailable("no CPUs reported".into()));
        }
        let total = sys.total_memory();
        if total == 0 {
            return Err(MonitorError::SourceUnavailable(
                "total memory reported as zero".into(),
            ));
        }
        let used = total.saturating_sub(sys.available_memory());

        // Enumerate in pid order so equal-CPU ties rank the same way every time.
        let mut entries: Vec<_> = sys.processes().iter().collect();
        entries.sort_unstable_by_key(|(pid, _)| pid.as_u32());
        let processes = entries
            .into_iter()
            .map(|(pid, p)| {
                let pid = pid.as_u32();
                if matches!(p.status(), ProcessStatus::Zombie | ProcessStatus::Dead) {
                    return ProcessRecord::Vanished { pid };
                }
                ProcessRecord::Present(ProcessSample {
                    pid,
                    name: p.name().to_string_lossy().into_owned(),
                    cpu_percent: p.cpu_usage() as f64,
                    memory_percent: (p.memory() as f64 / total as f64) * 100.0,
                })
            })
            .collect();

        Ok(RawSample {
            cpu_percent: sys.global_cpu_usage() as f64,
            memory_used_bytes: used,
            memory_total_bytes: total,
            processes,
        })
    }
}

impl ProcessControl for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "terminate"))]
    fn terminate(&self, pid: u32) -> Result<(), MonitorError> {
        let mut sys = self.control.lock().map_err(|e| MonitorError::TerminationFailed {
            pid,
            message: format!("sysinfo lock poisoned: {e}"),
        })?;

        let sys_pid = Pid::from_u32(pid);
        sys.refresh_processes(ProcessesToUpdate::Some(&[sys_pid]), true);
        let process = match sys.process(sys_pid) {
            // A zombie still accepts the signal; only a reaped process is gone.
            Some(p) if !matches!(p.status(), ProcessStatus::Dead) => p,
            _ => return Err(MonitorError::ProcessNotFound(pid)),
        };

        let sent = match process.kill_with(Signal::Term) {
            Some(sent) => sent,
            // SIGTERM has no equivalent on this platform; use its native kill.
            None => process.kill(),
        };
        if sent {
            Ok(())
        } else {
            Err(kill_failure(pid, &std::io::Error::last_os_error()))
        }
    }
}
