//! Configuration schema definitions for installcheck.
//!
//! This module contains the struct definitions that map to the
//! `.installcheck.yml` file format. Every field has a default, so an
//! absent or empty file yields the stock 2DO installer layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for `.installcheck.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Name shown in the report banner.
    pub title: String,

    /// Shell interpreter used for syntax checks and function probes.
    pub shell: String,

    /// Wall-clock limit for each subprocess, in seconds.
    pub timeout_secs: u64,

    /// Require every function marker (and a detected OS) in the probe.
    #[serde(skip_serializing_if = "is_false")]
    pub strict_functions: bool,

    /// Installer script locations.
    pub installers: InstallersConfig,

    /// Function probe settings.
    pub functions: FunctionsConfig,

    /// Packaging descriptor expectations.
    pub package: PackageConfig,

    /// Documentation expectations.
    pub docs: DocsConfig,

    /// Commands printed after a fully successful run.
    pub install_commands: Vec<InstallCommand>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            title: "2DO Installation System".to_string(),
            shell: "bash".to_string(),
            timeout_secs: 30,
            strict_functions: false,
            installers: InstallersConfig::default(),
            functions: FunctionsConfig::default(),
            package: PackageConfig::default(),
            docs: DocsConfig::default(),
            install_commands: default_install_commands(),
        }
    }
}

impl VerifyConfig {
    /// Subprocess timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Installer script paths, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallersConfig {
    /// Primary-platform script (must be executable).
    pub primary: PathBuf,

    /// Secondary-platform script (must exist).
    pub secondary: PathBuf,
}

impl Default for InstallersConfig {
    fn default() -> Self {
        Self {
            primary: PathBuf::from("install.sh"),
            secondary: PathBuf::from("install.ps1"),
        }
    }
}

/// Settings for the function-definition probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionsConfig {
    /// Entry point redefined as a no-op after sourcing.
    pub entry_point: String,

    /// Functions the installer must define. The first one is invoked
    /// and its output reported.
    pub required: Vec<String>,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            entry_point: "main".to_string(),
            required: vec![
                "detect_os".to_string(),
                "check_python".to_string(),
                "install_2do".to_string(),
            ],
        }
    }
}

/// Packaging descriptor expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Descriptor path, relative to the project root.
    pub path: PathBuf,

    /// Expected package name, matched as `name = "<name>"`.
    pub name: String,

    /// Marker of the entry-point scripts section.
    pub scripts_marker: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pyproject.toml"),
            name: "2do".to_string(),
            scripts_marker: "[project.scripts]".to_string(),
        }
    }
}

impl PackageConfig {
    /// The literal declaration searched for in the descriptor.
    pub fn name_declaration(&self) -> String {
        format!("name = \"{}\"", self.name)
    }
}

/// Documentation expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// README path, relative to the project root.
    pub path: PathBuf,

    /// Substrings that must all appear in the README.
    pub required: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("README.md"),
            required: vec![
                "curl".to_string(),
                "install.sh".to_string(),
                "iwr".to_string(),
                "install.ps1".to_string(),
            ],
        }
    }
}

/// A labelled installation command shown on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallCommand {
    /// Platform label (e.g. "Unix/Linux/macOS").
    pub label: String,

    /// The one-line install invocation.
    pub command: String,
}

fn default_install_commands() -> Vec<InstallCommand> {
    vec![
        InstallCommand {
            label: "Unix/Linux/macOS".to_string(),
            command: "curl -fsSL https://raw.githubusercontent.com/STAFE-GROUP-AB/2do-developer/main/install.sh | bash".to_string(),
        },
        InstallCommand {
            label: "Windows (PowerShell)".to_string(),
            command: "iwr -useb https://raw.githubusercontent.com/STAFE-GROUP-AB/2do-developer/main/install.ps1 | iex".to_string(),
        },
    ]
}

fn is_false(b: &bool) -> bool {
    !*b
}
