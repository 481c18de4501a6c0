//! Host shell invocations used by the checks.

use super::command::{execute, CommandOptions, CommandResult};
use super::platform::ShellType;
use crate::config::VerifyConfig;
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

/// Runs the configured shell in parse-only or script mode.
///
/// Every call returns a [`CommandResult`]; spawn failures become a failed
/// result carrying the error message, so callers only inspect outcomes.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    timeout: Duration,
}

impl ShellRunner {
    /// Create a runner for `shell` with a per-invocation timeout.
    pub fn new(shell: impl Into<String>, timeout: Duration) -> Self {
        Self {
            shell: shell.into(),
            timeout,
        }
    }

    /// Create a runner from the verifier configuration.
    pub fn from_config(config: &VerifyConfig) -> Self {
        Self::new(config.shell.clone(), config.timeout())
    }

    /// The shell executable.
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Classification of the shell executable.
    pub fn shell_type(&self) -> ShellType {
        ShellType::from_executable(&self.shell)
    }

    /// The per-invocation timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Parse `script` without executing it (`<shell> -n <script>`).
    pub fn syntax_check(&self, script: &Path, cwd: &Path) -> CommandResult {
        self.run([OsStr::new("-n"), script.as_os_str()], cwd)
    }

    /// Execute `script` with the shell.
    pub fn run_script(&self, script: &Path, cwd: &Path) -> CommandResult {
        self.run([script.as_os_str()], cwd)
    }

    fn run<'a>(&self, args: impl IntoIterator<Item = &'a OsStr>, cwd: &Path) -> CommandResult {
        let options = CommandOptions {
            cwd: Some(cwd.to_path_buf()),
            timeout: Some(self.timeout),
        };

        match execute(&self.shell, args, &options) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Shell invocation failed: {}", e);
                CommandResult::from_error(e.to_string())
            }
        }
    }
}
