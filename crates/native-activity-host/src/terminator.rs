//! Process lifecycle terminator.
//!
//! The renderer owns process-wide resources (GPU context, worker threads)
//! that outlive the activity object, so the host ends the whole process
//! instead of letting the OS tear down only the activity.

use crate::HostError;

/// OS process identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pid(pub i32);

impl std::fmt::Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

pub trait ProcessControl {
    fn my_pid(&self) -> Pid;

    /// Kill the process `pid`. When `pid` is the current process the real
    /// implementation does not return.
    fn kill_process(&mut self, pid: Pid);
}

/// The current OS process.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsProcess;

impl ProcessControl for OsProcess {
    fn my_pid(&self) -> Pid {
        Pid(std::process::id() as i32)
    }

    #[cfg(unix)]
    fn kill_process(&mut self, pid: Pid) {
        // Same signal as android.os.Process.killProcess.
        // SAFETY: kill(2) has no memory-safety preconditions.
        let rc = unsafe { libc::kill(pid.0, libc::SIGKILL) };
        if rc != 0 {
            tracing::error!(
                "kill({pid}, SIGKILL) failed: {}",
                std::io::Error::last_os_error()
            );
        }
        if pid == self.my_pid() {
            // Delivery of SIGKILL to ourselves is asynchronous; never run past this point.
            std::process::abort();
        }
    }

    #[cfg(not(unix))]
    fn kill_process(&mut self, pid: Pid) {
        if pid == self.my_pid() {
            std::process::exit(0);
        }
        tracing::error!("Killing foreign process {pid} is not supported on this platform");
    }
}

/// Kill the current process. This is the host's final action.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn terminate<C: ProcessControl>(process: &mut C) {
    let pid = process.my_pid();
    tracing::info!("Activity destroyed, killing process {pid}");
    process.kill_process(pid);
}

/// Log an unrecoverable bootstrap failure and crash the process.
pub fn fatal(err: &HostError) -> ! {
    tracing::error!("Fatal host error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        tracing::error!("  caused by: {cause}");
        source = cause.source();
    }
    std::process::abort();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, Journal, RecordingProcess};

    #[test]
    fn test_terminate_kills_own_pid_once() {
        let journal = Journal::default();
        let mut process = RecordingProcess::new(journal.clone(), 4242);

        terminate(&mut process);

        assert_eq!(*journal.borrow(), vec![Call::Kill(Pid(4242))]);
    }

    #[test]
    fn test_os_process_reports_current_pid() {
        assert_eq!(OsProcess.my_pid(), Pid(std::process::id() as i32));
    }
}
