//! Shell command execution.

pub mod command;
pub mod platform;
pub mod runner;

pub use command::{execute, CommandOptions, CommandResult, TIMEOUT_MESSAGE};
pub use platform::{is_executable, ShellType};
pub use runner::ShellRunner;
