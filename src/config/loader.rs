//! Configuration file discovery and loading.
//!
//! Resolution order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (`<root>/.installcheck.yml`) or an explicit `--config` file
//! 3. Command-line overrides ([`ConfigOverrides`])

use crate::config::schema::VerifyConfig;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project-level configuration.
pub const CONFIG_FILE_NAME: &str = ".installcheck.yml";

/// Values supplied on the command line that take precedence over files.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `timeout_secs`.
    pub timeout_secs: Option<u64>,

    /// Forces strict function checking on.
    pub strict_functions: bool,
}

impl ConfigOverrides {
    /// Apply these overrides to a loaded config.
    pub fn apply(&self, config: &mut VerifyConfig) {
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if self.strict_functions {
            config.strict_functions = true;
        }
    }
}

/// Find the project config at `<root>/.installcheck.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VerifyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`VerifyConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerifyConfig> {
    if content.trim().is_empty() {
        return Ok(VerifyConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VerifyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject configurations the verifier cannot run with.
pub fn validate_config(config: &VerifyConfig) -> Result<()> {
    if config.shell.trim().is_empty() {
        return Err(VerifyError::ConfigValidationError {
            message: "shell must not be empty".to_string(),
        });
    }
    if config.timeout_secs == 0 {
        return Err(VerifyError::ConfigValidationError {
            message: "timeout_secs must be greater than zero".to_string(),
        });
    }
    if config.functions.required.is_empty() {
        return Err(VerifyError::ConfigValidationError {
            message: "functions.required must list at least one function".to_string(),
        });
    }
    let functions = &config.functions;
    for name in std::iter::once(&functions.entry_point).chain(&functions.required) {
        if !is_shell_identifier(name) {
            return Err(VerifyError::ConfigValidationError {
                message: format!("'{}' is not a valid shell function name", name),
            });
        }
    }
    Ok(())
}

/// Whether `name` is a portable shell function name (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_shell_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Load the effective configuration for a project.
///
/// With `config_override`, that file must exist and is used instead of
/// the project config. Without it, a missing project config means defaults.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<VerifyConfig> {
    let mut config = match config_override {
        Some(path) => load_config_file(path)?,
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            }
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                VerifyConfig::default()
            }
        },
    };

    overrides.apply(&mut config);
    validate_config(&config)?;
    Ok(config)
}
