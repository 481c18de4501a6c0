//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands write to a caller-provided
//! writer so they can be exercised without a terminal.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod list;
pub mod verify;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, Presentation};
