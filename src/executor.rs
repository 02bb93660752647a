//! Dispatch between built-in handling and external processes.
//!
//! The executor is a two-way branch with no other states: a command either
//! matches a built-in and runs in-process, or it becomes a child process
//! the shell blocks on until true termination.

use crate::builtin::{self, Exit};
use crate::command::{Command, ExitCode};
use crate::error::ShellError;
use std::io;
use std::process::ExitStatus;

/// Loop signal produced by executing one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep prompting.
    Continue,
    /// Stop the session. Only the `exit` built-in produces this.
    Exit,
}

/// The process-creation boundary.
///
/// The OS implementation spawns a child and blocks until it reaches a
/// terminal state. Tests substitute a recording implementation to observe
/// exactly when and with what argv a process would have been created.
pub trait Spawner {
    /// Spawns `cmd` and waits for an exit-or-signal termination, returning
    /// the child's exit code.
    fn spawn_and_wait(&mut self, cmd: &Command) -> io::Result<ExitCode>;
}

/// Spawner backed by `std::process`.
///
/// The child inherits the parent's environment and standard streams
/// unmodified, and the name is resolved through the operating system's
/// PATH search, `execvp`-style.
#[derive(Debug, Default)]
pub struct OsSpawner;

impl Spawner for OsSpawner {
    fn spawn_and_wait(&mut self, cmd: &Command) -> io::Result<ExitCode> {
        let mut child = std::process::Command::new(cmd.name())
            .args(cmd.args())
            .spawn()?;
        // wait() only returns on a true termination; a job-control stop
        // does not wake it.
        let status = child.wait()?;
        match status.code() {
            Some(code) => Ok(code),
            None => Ok(terminated_by_signal(status)),
        }
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match ExitStatusExt::signal(&status) {
        Some(signal) => 128 + signal,
        None => -1,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> ExitCode {
    -1
}

/// Runs one command at a time against a [`Spawner`].
pub struct Executor<S = OsSpawner> {
    spawner: S,
}

impl Default for Executor<OsSpawner> {
    fn default() -> Self {
        Self::new(OsSpawner)
    }
}

impl<S: Spawner> Executor<S> {
    pub fn new(spawner: S) -> Self {
        Self { spawner }
    }

    /// Executes a single command.
    ///
    /// Built-ins are checked before any process-creation work, so `exit`
    /// costs nothing. Every external path — whatever the child's fate —
    /// yields [`Flow::Continue`]; the shell does not inspect the child's
    /// exit status beyond logging it.
    pub fn execute(&mut self, cmd: &Command) -> Result<Flow, ShellError> {
        if let Some(handled) = builtin::try_builtin::<Exit>(cmd) {
            return match handled {
                Ok(flow) => Ok(flow),
                Err(err) => {
                    eprintln!("xsh: {}: {err}", cmd.name());
                    Ok(Flow::Continue)
                }
            };
        }

        match self.spawner.spawn_and_wait(cmd) {
            Ok(code) => {
                log::debug!("{} terminated with code {code}", cmd.name());
                Ok(Flow::Continue)
            }
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                // The exec-failure class: the command never started. The
                // session goes on.
                eprintln!("xsh: {}: {err}", cmd.name());
                Ok(Flow::Continue)
            }
            // The fork-failure class is fatal.
            Err(err) => Err(ShellError::Spawn {
                name: cmd.name().to_owned(),
                source: err,
            }),
        }
    }
}
