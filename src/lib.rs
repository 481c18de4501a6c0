//! installcheck - Verify that a project's installation system is ready to ship.
//!
//! installcheck inspects installer scripts, packaging metadata, and
//! documentation, runs a fixed sequence of checks, and reports how many
//! passed. A run succeeds only when every check passes.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and their registry
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Collected results and human/JSON formatters
//! - [`shell`] - Subprocess execution with timeouts
//! - [`ui`] - Theme, status icons, and verbosity
//! - [`verifier`] - Runs the checks and builds the report
//!
//! # Example
//!
//! ```
//! use installcheck::config::VerifyConfig;
//! use installcheck::verifier::Verifier;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let report = Verifier::new(temp.path(), VerifyConfig::default())
//!     .with_scratch_dir(temp.path())
//!     .run();
//!
//! // An empty directory has none of the expected artifacts.
//! assert_eq!(report.total(), 5);
//! assert_eq!(report.passed(), 0);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;
pub mod verifier;

pub use error::{Result, VerifyError};
