//! External command execution.
//!
//! Commands are spawned directly (no intermediate shell) with stdout and
//! stderr captured. An optional timeout bounds how long the caller blocks,
//! covering both the child's exit and the end of its output. On expiry
//! [`ExecError::TimedOut`] is returned; a child still running is killed.

use std::io::{ErrorKind, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of executing a command that ran to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Timeout (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with only a timeout set.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Reasons a command could not produce a [`CommandResult`].
#[derive(Debug, Error)]
pub enum ExecError {
    /// The executable does not exist on PATH.
    #[error("{program}: command not found")]
    NotFound { program: String },

    /// The command or its output did not finish before the deadline.
    #[error("{program} timed out after {}s", timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    /// Spawning or waiting on the command failed.
    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Point in time by which a command and its output must be done.
#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
    timeout: Duration,
}

impl Deadline {
    fn after(start: Instant, timeout: Duration) -> Self {
        Self {
            at: start + timeout,
            timeout,
        }
    }

    fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    fn is_past(&self) -> bool {
        Instant::now() >= self.at
    }

    fn expired(&self, program: &str) -> ExecError {
        ExecError::TimedOut {
            program: program.to_string(),
            timeout: self.timeout,
        }
    }
}

/// Execute `program` with `args`, capturing its output.
pub fn execute(
    program: &str,
    args: &[String],
    options: &CommandOptions,
) -> Result<CommandResult, ExecError> {
    let start = Instant::now();
    let deadline = options.timeout.map(|t| Deadline::after(start, t));
    debug!(program, ?args, timeout = ?options.timeout, "Running command");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => ExecError::NotFound {
                program: program.to_string(),
            },
            _ => ExecError::Io {
                program: program.to_string(),
                source,
            },
        })?;

    let stdout_reader = child.stdout.take().map(spawn_reader);
    let stderr_reader = child.stderr.take().map(spawn_reader);

    let status = match deadline {
        Some(deadline) => wait_with_deadline(&mut child, program, deadline)?,
        None => child.wait().map_err(|source| ExecError::Io {
            program: program.to_string(),
            source,
        })?,
    };

    // A process left behind by the child can keep the pipes open after
    // the child itself has exited, so output is bounded by the deadline too.
    let stdout = collect_output(stdout_reader, program, deadline)?;
    let stderr = collect_output(stderr_reader, program, deadline)?;
    let duration = start.elapsed();

    debug!(
        program,
        code = ?status.code(),
        elapsed_ms = duration.as_millis(),
        "Command finished"
    );

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration,
        success: status.success(),
    })
}

/// Poll `child` until it exits or `deadline` passes.
///
/// On timeout the child is killed and reaped.
fn wait_with_deadline(
    child: &mut Child,
    program: &str,
    deadline: Deadline,
) -> Result<ExitStatus, ExecError> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {}
            Err(source) => {
                return Err(ExecError::Io {
                    program: program.to_string(),
                    source,
                })
            }
        }

        if deadline.is_past() {
            warn!(program, pid = child.id(), "Command timed out, killing it");
            if let Err(e) = child.kill() {
                debug!(program, error = %e, "Failed to kill timed out command");
            }
            if let Err(e) = child.wait() {
                debug!(program, error = %e, "Failed to reap timed out command");
            }
            return Err(deadline.expired(program));
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Read `source` to the end on its own thread.
///
/// The thread is detached; if the receiver is dropped after a timeout the
/// thread ends whenever the pipe closes.
fn spawn_reader<R: Read + Send + 'static>(mut source: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = source.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

fn collect_output(
    reader: Option<Receiver<String>>,
    program: &str,
    deadline: Option<Deadline>,
) -> Result<String, ExecError> {
    let Some(rx) = reader else {
        return Ok(String::new());
    };

    let Some(deadline) = deadline else {
        return Ok(rx.recv().unwrap_or_default());
    };

    match rx.recv_timeout(deadline.remaining()) {
        Ok(output) => Ok(output),
        Err(RecvTimeoutError::Timeout) => {
            warn!(program, "Command exited but its output stayed open past the deadline");
            Err(deadline.expired(program))
        }
        Err(RecvTimeoutError::Disconnected) => Ok(String::new()),
    }
}
