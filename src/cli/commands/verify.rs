//! Verify command implementation.
//!
//! The `installcheck verify` command runs every check against the project
//! and reports the results. It is also what runs when no subcommand is given.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::VerifyArgs;
use crate::config::{load_config, ConfigOverrides};
use crate::error::Result;
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
use crate::verifier::Verifier;

use super::dispatcher::{Command, CommandResult, Presentation};

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: VerifyArgs,
    presentation: Presentation,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(
        project_root: &Path,
        config_path: Option<&Path>,
        args: VerifyArgs,
        presentation: Presentation,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
            presentation,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &VerifyArgs {
        &self.args
    }
}

impl Command for VerifyCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let overrides = ConfigOverrides {
            timeout_secs: self.args.timeout,
            strict_functions: self.args.strict_functions,
        };
        let config = load_config(&self.project_root, self.config_path.as_deref(), &overrides)?;

        let report = Verifier::new(&self.project_root, config).run();

        match self.args.format {
            OutputFormat::Human => {
                HumanFormatter::new(self.presentation.use_color, self.presentation.mode)
                    .format(&report, out)?
            }
            OutputFormat::Json => JsonFormatter.format(&report, out)?,
        }
        out.flush()?;

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}
