//! Installer function-definition probe.
//!
//! A generated script sources the installer, replaces its entry point with
//! a no-op, and reports which expected functions are defined. The first
//! expected function is then invoked and its output recorded.
//!
//! By default only the first function's marker decides the outcome; with
//! `strict_functions` every marker and a non-empty result are required.

use super::check::{CheckContext, CheckId, VerifyCheck};
use super::outcome::{command_diagnostic, CheckOutcome, Finding};
use crate::shell::ShellType;
use std::io::Write;
use std::path::Path;

/// Sources the primary installer and probes its functions.
pub struct InstallerFunctionsCheck;

impl VerifyCheck for InstallerFunctionsCheck {
    fn id(&self) -> CheckId {
        CheckId::new("installer-functions")
    }

    fn description(&self) -> &str {
        "Checking function definitions"
    }

    fn check(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let functions = &ctx.config.functions;
        let Some(first) = functions.required.first() else {
            return CheckOutcome::failed("No functions configured to probe");
        };

        let shell_type = ctx.runner.shell_type();
        if shell_type != ShellType::Unknown && !shell_type.supports_function_probe() {
            return CheckOutcome::failed(format!(
                "{} cannot source scripts or list functions",
                ctx.runner.shell()
            ));
        }

        let installer = ctx.resolve(&ctx.config.installers.primary);
        let script = probe_script(&installer, &functions.entry_point, &functions.required);

        let mut probe = match tempfile::Builder::new()
            .prefix("installcheck-probe-")
            .suffix(".sh")
            .tempfile_in(ctx.scratch_dir)
        {
            Ok(file) => file,
            Err(e) => {
                return CheckOutcome::failed(format!("Could not create probe script: {}", e));
            }
        };
        if let Err(e) = probe.write_all(script.as_bytes()).and_then(|_| probe.flush()) {
            return CheckOutcome::failed(format!("Could not write probe script: {}", e));
        }

        tracing::debug!("Probing functions via {}", probe.path().display());
        let result = ctx.runner.run_script(probe.path(), ctx.project_root);

        if let Err(e) = probe.close() {
            tracing::warn!("Failed to remove probe script: {}", e);
        }

        let strict = ctx.config.strict_functions;
        let mut findings = Vec::new();
        let mut all_defined = true;
        for name in &functions.required {
            if has_marker(&result.stdout, name) {
                findings.push(Finding::pass(format!("{} is defined", name)));
            } else if strict {
                findings.push(Finding::fail(format!("{} is not defined", name)));
                all_defined = false;
            } else {
                findings.push(Finding::note(format!("{} is not defined", name)));
                all_defined = false;
            }
        }

        let value = returned_value(&result.stdout, first);
        if let Some(value) = &value {
            findings.push(Finding::note(format!("{} returned '{}'", first, value)));
        }

        let first_defined = has_marker(&result.stdout, first);
        let passed = if strict {
            result.success && all_defined && value.is_some()
        } else {
            result.success && first_defined
        };

        let outcome = if passed {
            CheckOutcome::new(true, findings)
        } else {
            let diagnostic = if !result.success {
                command_diagnostic(&result)
            } else if !first_defined {
                format!("{} is not defined", first)
            } else if !all_defined {
                "Not all expected functions are defined".to_string()
            } else {
                format!("{} returned nothing", first)
            };
            CheckOutcome::new(false, findings).with_diagnostic(diagnostic)
        };

        outcome.with_output(&result.stdout)
    }
}

/// Marker line the probe prints for a defined function.
pub fn defined_marker(name: &str) -> String {
    format!("{} function defined", name)
}

/// Whether `stdout` has the marker line for `name` on a line of its own.
fn has_marker(stdout: &str, name: &str) -> bool {
    let marker = defined_marker(name);
    stdout.lines().any(|line| line.trim_end() == marker)
}

fn returned_prefix(name: &str) -> String {
    format!("{} returned: ", name)
}

fn returned_value(stdout: &str, name: &str) -> Option<String> {
    let prefix = returned_prefix(name);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Build the probe script.
///
/// Function names must already be valid shell identifiers.
pub fn probe_script(installer: &Path, entry_point: &str, functions: &[String]) -> String {
    let mut script = String::new();
    script.push_str(&format!("source {}\n\n", shell_quote(&installer.to_string_lossy())));
    script.push_str(&format!("{}() {{ :; }}\n\n", entry_point));

    for name in functions {
        script.push_str(&format!(
            "if declare -f {name} >/dev/null; then\n    echo \"{marker}\"\nfi\n\n",
            name = name,
            marker = defined_marker(name),
        ));
    }

    if let Some(first) = functions.first() {
        script.push_str(&format!(
            "probe_value=$({})\necho \"{}$probe_value\"\n",
            first,
            returned_prefix(first)
        ));
    }

    script
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
