//! Config command implementation.
//!
//! The `installcheck config` command shows the resolved configuration.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{find_project_config, load_config, ConfigOverrides};
use crate::error::{Result, VerifyError};

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    fn source(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(|| find_project_config(&self.project_root))
    }
}

impl Command for ConfigCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(
            &self.project_root,
            self.config_path.as_deref(),
            &ConfigOverrides::default(),
        )?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| VerifyError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
        } else {
            match self.source() {
                Some(path) => writeln!(out, "# {}", path.display())?,
                None => writeln!(out, "# defaults")?,
            }
            let yaml = serde_yaml::to_string(&config).map_err(|e| VerifyError::Other(e.into()))?;
            write!(out, "{}", yaml)?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerifyConfig;
    use std::fs;
    use tempfile::TempDir;

    fn run(root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> String {
        let cmd = ConfigCommand::new(root, config_path, args);
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        assert!(result.success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn config_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
    }

    #[test]
    fn shows_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();

        let output = run(temp.path(), None, ConfigArgs::default());

        assert!(output.starts_with("# defaults"));
        assert!(output.contains("timeout_secs: 30"));
        assert!(output.contains("detect_os"));
    }

    #[test]
    fn shows_config_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".installcheck.yml"), "title: Widget\n").unwrap();

        let output = run(temp.path(), None, ConfigArgs::default());

        assert!(output.lines().next().unwrap().contains(".installcheck.yml"));
        assert!(output.contains("title: Widget"));
    }

    #[test]
    fn explicit_config_path_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".installcheck.yml"), "title: Project\n").unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "title: Custom\n").unwrap();

        let output = run(temp.path(), Some(&custom), ConfigArgs::default());

        assert!(output.contains("custom.yml"));
        assert!(output.contains("title: Custom"));
    }

    #[test]
    fn json_output_round_trips() {
        let temp = TempDir::new().unwrap();

        let output = run(temp.path(), None, ConfigArgs { json: true });

        let config: VerifyConfig = serde_json::from_str(&output).unwrap();
        assert_eq!(config, VerifyConfig::default());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(
            temp.path(),
            Some(&temp.path().join("nope.yml")),
            ConfigArgs::default(),
        );
        let mut out = Vec::new();

        let result = cmd.execute(&mut out);

        assert!(matches!(result, Err(VerifyError::ConfigNotFound { .. })));
    }
}
