//! Installer syntax check, delegated to the shell's parse-only mode.

use super::check::{CheckContext, CheckId, VerifyCheck};
use super::outcome::{command_diagnostic, CheckOutcome, Finding};
use crate::shell::ShellType;

/// Runs `<shell> -n` against the primary installer.
pub struct InstallerSyntaxCheck;

impl VerifyCheck for InstallerSyntaxCheck {
    fn id(&self) -> CheckId {
        CheckId::new("installer-syntax")
    }

    fn description(&self) -> &str {
        "Checking script syntax"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let relative = &ctx.config.installers.primary;
        let name = relative.display();
        let script = ctx.resolve(relative);

        if !script.is_file() {
            return CheckOutcome::failed(format!("{} not found", name));
        }

        let shell_type = ctx.runner.shell_type();
        if shell_type != ShellType::Unknown && !shell_type.supports_syntax_check() {
            return CheckOutcome::failed(format!(
                "{} has no parse-only mode",
                ctx.runner.shell()
            ));
        }

        let result = ctx.runner.syntax_check(&script, ctx.project_root);
        if result.success {
            CheckOutcome::new(true, vec![Finding::pass(format!("{} syntax is valid", name))])
        } else {
            let diagnostic = command_diagnostic(&result);
            tracing::debug!("Syntax check of {} failed: {}", name, diagnostic);
            CheckOutcome::new(false, vec![Finding::fail(format!("{} syntax error", name))])
                .with_diagnostic(diagnostic)
        }
    }
}
