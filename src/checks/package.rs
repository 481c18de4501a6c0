//! Packaging descriptor check.

use super::check::{CheckContext, CheckId, VerifyCheck};
use super::outcome::{read_artifact, CheckOutcome, Finding};

/// Confirms the descriptor declares the package name and a scripts section.
pub struct PackageConfigCheck;

impl VerifyCheck for PackageConfigCheck {
    fn id(&self) -> CheckId {
        CheckId::new("package-config")
    }

    fn description(&self) -> &str {
        "Checking package configuration"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let package = &ctx.config.package;
        let content = match read_artifact(&ctx.resolve(&package.path), &package.path) {
            Ok(content) => content,
            Err(message) => return CheckOutcome::failed(message),
        };

        let name = package.path.display();
        let expected = [package.name_declaration(), package.scripts_marker.clone()];
        let mut findings = Vec::new();
        let mut passed = true;

        for needle in &expected {
            if content.contains(needle.as_str()) {
                findings.push(Finding::pass(format!("{} declares {}", name, needle)));
            } else {
                findings.push(Finding::fail(format!("{} is missing {}", name, needle)));
                passed = false;
            }
        }

        if passed {
            CheckOutcome::new(true, findings)
        } else {
            CheckOutcome::new(false, findings)
                .with_diagnostic(format!("{} missing required sections", name))
        }
    }
}
