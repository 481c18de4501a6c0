//! Subprocess execution with captured output and a wall-clock timeout.

use crate::error::{Result, VerifyError};
use std::ffi::{OsStr, OsString};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Diagnostic reported when a command exceeds its timeout.
pub const TIMEOUT_MESSAGE: &str = "Command timed out.";

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal, timed out, or never started).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed for exceeding its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    pub fn timed_out(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: TIMEOUT_MESSAGE.to_string(),
            duration,
            success: false,
            timed_out: true,
        }
    }

    /// Create a failure result for a command that could not run at all.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self::failure(None, String::new(), message.into(), Duration::ZERO)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Wall-clock limit (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

/// Execute `program` with `args`, capturing stdout and stderr.
///
/// Stdin is closed. A command still running at the deadline is killed
/// (with its process group on Unix) and reported via
/// [`CommandResult::timed_out`]. Only a failure to start or wait on the
/// process is an `Err`.
pub fn execute<I, S>(program: &str, args: I, options: &CommandOptions) -> Result<CommandResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let start = Instant::now();
    let args: Vec<OsString> = args
        .into_iter()
        .map(|a| a.as_ref().to_os_string())
        .collect();
    let command_line = describe(program, &args);

    let mut cmd = Command::new(program);
    cmd.args(&args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    tracing::debug!("Running: {}", command_line);

    let mut child = cmd.spawn().map_err(|e| VerifyError::CommandSpawn {
        command: command_line.clone(),
        message: e.to_string(),
    })?;

    let stdout_handle = spawn_reader(child.stdout.take());
    let stderr_handle = spawn_reader(child.stderr.take());

    let status = match wait_with_deadline(&mut child, options.timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            terminate(&mut child);
            // Reader threads are left to finish on their own; a grandchild
            // outside the process group may still hold the pipes open.
            tracing::warn!("Timed out after {:?}: {}", options.timeout, command_line);
            return Ok(CommandResult::timed_out(start.elapsed()));
        }
        Err(e) => {
            terminate(&mut child);
            return Err(VerifyError::CommandSpawn {
                command: command_line,
                message: e.to_string(),
            });
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    let duration = start.elapsed();

    tracing::debug!(
        "Finished in {:?} with {:?}: {}",
        duration,
        status.code(),
        command_line
    );

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

fn describe(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

fn spawn_reader<R>(pipe: Option<R>) -> thread::JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Wait for the child, polling until `timeout` elapses.
///
/// Returns `Ok(None)` when the deadline passes first. A timeout too large
/// to represent as an `Instant` waits indefinitely.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Option<Duration>,
) -> std::io::Result<Option<ExitStatus>> {
    let Some(deadline) = timeout.and_then(|t| Instant::now().checked_add(t)) else {
        return child.wait().map(Some);
    };

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: kill() only sends a signal; the negative pid addresses the
            // process group created for this child by process_group(0).
            unsafe {
                libc::kill(-pid, libc::SIGKILL);
            }
        }
    }

    let _ = child.kill();
    let _ = child.wait();
}
