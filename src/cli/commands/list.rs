//! List command implementation.
//!
//! The `installcheck list` command shows the checks in the order they run.

use std::io::Write;

use serde::Serialize;

use crate::checks::CheckRegistry;
use crate::cli::args::ListArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
    registry: CheckRegistry,
}

#[derive(Serialize)]
struct ListedCheck {
    index: usize,
    id: String,
    description: String,
}

impl ListCommand {
    /// Create a new list command over the built-in checks.
    pub fn new(args: ListArgs) -> Self {
        Self {
            args,
            registry: CheckRegistry::with_builtins(),
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn listed(&self) -> Vec<ListedCheck> {
        self.registry
            .iter()
            .enumerate()
            .map(|(i, check)| ListedCheck {
                index: i + 1,
                id: check.id().to_string(),
                description: check.description().to_string(),
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let checks = self.listed();

        if self.args.json {
            let json = serde_json::to_string_pretty(&checks)
                .map_err(|e| crate::error::VerifyError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        let width = checks.iter().map(|c| c.id.len()).max().unwrap_or(0);
        for check in &checks {
            writeln!(
                out,
                "{}. {:<width$}  {}",
                check.index,
                check.id,
                check.description,
                width = width
            )?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: ListArgs) -> String {
        let mut out = Vec::new();
        let result = ListCommand::new(args).execute(&mut out).unwrap();
        assert!(result.success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_checks_in_order() {
        let output = run(ListArgs::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("1. installer-files"));
        assert!(lines[1].starts_with("2. installer-syntax"));
        assert!(lines[2].starts_with("3. installer-functions"));
        assert!(lines[3].starts_with("4. package-config"));
        assert!(lines[4].starts_with("5. documentation"));
        assert!(lines[4].ends_with("Checking documentation"));
    }

    #[test]
    fn lists_as_json() {
        let output = run(ListArgs { json: true });
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json.as_array().unwrap().len(), 5);
        assert_eq!(json[2]["id"], "installer-functions");
        assert_eq!(json[2]["index"], 3);
    }
}
