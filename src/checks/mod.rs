//! Verification checks.
//!
//! Each check implements [`VerifyCheck`] and reports a [`CheckOutcome`]
//! made of per-condition [`Finding`]s. The [`CheckRegistry`] holds the
//! fixed execution order:
//!
//! 1. [`InstallerFilesCheck`] - installers present, primary executable
//! 2. [`InstallerSyntaxCheck`] - primary installer parses
//! 3. [`InstallerFunctionsCheck`] - primary installer defines its functions
//! 4. [`PackageConfigCheck`] - packaging descriptor declares name and scripts
//! 5. [`DocumentationCheck`] - README documents both install commands

pub mod check;
pub mod docs;
pub mod files;
pub mod functions;
pub mod outcome;
pub mod package;
pub mod registry;
pub mod syntax;

pub use check::{CheckContext, CheckId, VerifyCheck};
pub use docs::DocumentationCheck;
pub use files::InstallerFilesCheck;
pub use functions::InstallerFunctionsCheck;
pub use outcome::{CheckOutcome, Finding, FindingLevel};
pub use package::PackageConfigCheck;
pub use registry::CheckRegistry;
pub use syntax::InstallerSyntaxCheck;
