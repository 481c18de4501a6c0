//! Check outcomes and findings.

use crate::shell::CommandResult;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Level of a single finding within a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingLevel {
    /// Condition holds.
    Pass,
    /// Condition does not hold.
    Fail,
    /// Informational; does not affect the outcome.
    Note,
}

/// One reported sub-condition of a check (e.g. "install.sh exists").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: FindingLevel,
    pub message: String,
}

impl Finding {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Pass,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Fail,
            message: message.into(),
        }
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Note,
            message: message.into(),
        }
    }
}

/// What a check reports back to the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the check passed as a whole.
    pub passed: bool,
    /// Per-condition findings, in the order they were evaluated.
    pub findings: Vec<Finding>,
    /// Explanation of a failure (interpreter error text, timeout, ...).
    pub diagnostic: Option<String>,
    /// Captured subprocess output worth showing in verbose mode.
    pub output: Option<String>,
}

impl CheckOutcome {
    /// Create an outcome from findings.
    pub fn new(passed: bool, findings: Vec<Finding>) -> Self {
        Self {
            passed,
            findings,
            diagnostic: None,
            output: None,
        }
    }

    /// Create a failed outcome with a single failing finding used as diagnostic.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(false, vec![Finding::fail(message.clone())]).with_diagnostic(message)
    }

    /// Attach a diagnostic message.
    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }

    /// Attach captured output, ignoring blank output.
    pub fn with_output(mut self, output: &str) -> Self {
        let trimmed = output.trim_end();
        if !trimmed.is_empty() {
            self.output = Some(trimmed.to_string());
        }
        self
    }
}

/// Text explaining why a command failed.
///
/// Prefers captured stderr; falls back to the exit code.
pub fn command_diagnostic(result: &CommandResult) -> String {
    let stderr = result.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match result.exit_code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated without an exit code".to_string(),
    }
}

/// Read a text artifact, turning IO failures into a user-facing message.
pub fn read_artifact(path: &Path, display: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            format!("{} not found", display.display())
        } else {
            format!("Could not read {}: {}", display.display(), e)
        }
    })
}
