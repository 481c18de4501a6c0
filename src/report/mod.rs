//! Verification reports and their formatters.
//!
//! A [`Report`] is built incrementally by the verifier, one [`CheckResult`]
//! per check, and rendered by a [`ReportFormatter`].

pub mod human;
pub mod json;

use crate::checks::{CheckId, CheckOutcome, Finding};
use crate::config::InstallCommand;
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for rendering a report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write + ?Sized>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

/// The evaluated result of one check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// 1-based position in the run.
    pub index: usize,
    /// Identifier of the check that produced this result.
    pub id: CheckId,
    /// Human-readable description.
    pub description: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Per-condition findings.
    pub findings: Vec<Finding>,
    /// Failure explanation.
    pub diagnostic: Option<String>,
    /// Captured subprocess output.
    pub output: Option<String>,
    /// Time spent running the check.
    pub duration: Duration,
}

/// Aggregate of all checks in one run.
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    project_root: PathBuf,
    started_at: DateTime<Utc>,
    install_commands: Vec<InstallCommand>,
    checks: Vec<CheckResult>,
}

impl Report {
    /// Start an empty report.
    pub fn new(
        title: impl Into<String>,
        project_root: &Path,
        install_commands: Vec<InstallCommand>,
    ) -> Self {
        Self {
            title: title.into(),
            project_root: project_root.to_path_buf(),
            started_at: Utc::now(),
            install_commands,
            checks: Vec::new(),
        }
    }

    /// Record the outcome of the next check, returning the stored result.
    pub fn record(
        &mut self,
        id: CheckId,
        description: &str,
        outcome: CheckOutcome,
        duration: Duration,
    ) -> &CheckResult {
        let result = CheckResult {
            index: self.checks.len() + 1,
            id,
            description: description.to_string(),
            passed: outcome.passed,
            findings: outcome.findings,
            diagnostic: outcome.diagnostic,
            output: outcome.output,
            duration,
        };
        self.checks.push(result);
        &self.checks[self.checks.len() - 1]
    }

    /// Banner title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Verified project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// When the run started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Commands advertised after a fully successful run.
    pub fn install_commands(&self) -> &[InstallCommand] {
        &self.install_commands
    }

    /// All recorded checks in order.
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// Number of checks run.
    pub fn total(&self) -> usize {
        self.checks.len()
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(outcomes: &[bool]) -> Report {
        let mut report = Report::new("Test", Path::new("/repo"), vec![]);
        for (i, passed) in outcomes.iter().enumerate() {
            report.record(
                CheckId::new(format!("check-{}", i)),
                "A check",
                CheckOutcome::new(*passed, vec![]),
                Duration::ZERO,
            );
        }
        report
    }

    #[test]
    fn record_assigns_one_based_indices() {
        let report = report_with(&[true, false, true]);
        let indices: Vec<usize> = report.checks().iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn counts_passed_and_total() {
        let report = report_with(&[true, false, true, true, false]);
        assert_eq!(report.total(), 5);
        assert_eq!(report.passed(), 3);
        assert!(report.passed() <= report.total());
        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn all_passed_exits_zero() {
        let report = report_with(&[true; 5]);
        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn record_keeps_outcome_details() {
        let mut report = Report::new("Test", Path::new("/repo"), vec![]);
        let outcome = CheckOutcome::failed("README.md not found").with_output("probe\n");
        let result = report.record(
            CheckId::new("documentation"),
            "Checking documentation",
            outcome,
            Duration::from_millis(3),
        );

        assert!(!result.passed);
        assert_eq!(result.diagnostic.as_deref(), Some("README.md not found"));
        assert_eq!(result.output.as_deref(), Some("probe"));
        assert_eq!(result.duration, Duration::from_millis(3));
    }
}
