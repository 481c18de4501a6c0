//! Installer presence check.
//!
//! The primary installer must exist, be a regular file, and be executable
//! by the current user. The secondary installer must exist.

use super::check::{CheckContext, CheckId, VerifyCheck};
use super::outcome::{CheckOutcome, Finding};
use crate::shell::is_executable;

/// Confirms both installer scripts are in place.
pub struct InstallerFilesCheck;

impl VerifyCheck for InstallerFilesCheck {
    fn id(&self) -> CheckId {
        CheckId::new("installer-files")
    }

    fn description(&self) -> &str {
        "Checking installation files exist"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let installers = &ctx.config.installers;
        let mut findings = Vec::new();
        let mut passed = true;

        let primary = ctx.resolve(&installers.primary);
        let primary_name = installers.primary.display();
        if primary.is_file() {
            findings.push(Finding::pass(format!("{} exists", primary_name)));
            if is_executable(&primary) {
                findings.push(Finding::pass(format!("{} is executable", primary_name)));
            } else {
                findings.push(Finding::fail(format!("{} is not executable", primary_name)));
                passed = false;
            }
        } else {
            findings.push(Finding::fail(format!("{} not found", primary_name)));
            passed = false;
        }

        let secondary_name = installers.secondary.display();
        if ctx.resolve(&installers.secondary).exists() {
            findings.push(Finding::pass(format!("{} exists", secondary_name)));
        } else {
            findings.push(Finding::fail(format!("{} not found", secondary_name)));
            passed = false;
        }

        CheckOutcome::new(passed, findings)
    }
}
