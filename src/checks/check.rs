//! Check definitions.
//!
//! - [`VerifyCheck`] - The trait every verification step implements
//! - [`CheckId`] - Stable identifier for a check
//! - [`CheckContext`] - What a check may look at while running

use super::outcome::CheckOutcome;
use crate::config::VerifyConfig;
use crate::shell::ShellRunner;
use std::path::{Path, PathBuf};

/// Stable identifier for a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckId(pub String);

impl CheckId {
    /// Create a new check ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inputs shared by every check in a run.
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// Repository root all configured paths are relative to.
    pub project_root: &'a Path,

    /// Effective configuration.
    pub config: &'a VerifyConfig,

    /// Shell used for subprocess checks.
    pub runner: &'a ShellRunner,

    /// Directory for temporary probe files.
    pub scratch_dir: &'a Path,
}

impl CheckContext<'_> {
    /// Resolve a configured path against the project root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.project_root.join(relative)
    }
}

/// A single verification step.
///
/// Checks never fail with an error: every problem is expressed in the
/// returned [`CheckOutcome`] so later checks always run.
pub trait VerifyCheck: Send + Sync {
    /// Unique identifier for this check.
    fn id(&self) -> CheckId;

    /// Human-readable description, shown as the check's heading.
    fn description(&self) -> &str;

    /// Run the check.
    fn check(&self, ctx: &CheckContext<'_>) -> CheckOutcome;
}
