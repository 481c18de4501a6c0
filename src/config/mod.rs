//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading, and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use installcheck::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".installcheck.yml"), "timeout_secs: 10").unwrap();
//!
//! let config = load_config(temp.path(), None, &ConfigOverrides::default()).unwrap();
//! assert_eq!(config.timeout_secs, 10);
//! assert_eq!(config.shell, "bash");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, is_shell_identifier, load_config, load_config_file, parse_config,
    validate_config, ConfigOverrides, CONFIG_FILE_NAME,
};
pub use schema::{
    DocsConfig, FunctionsConfig, InstallCommand, InstallersConfig, PackageConfig, VerifyConfig,
};
