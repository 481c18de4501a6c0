//! Terminal presentation: theme, status icons, and verbosity.

pub mod icons;
pub mod output;
pub mod theme;

pub use icons::StatusKind;
pub use output::OutputMode;
pub use theme::{should_use_colors, VerifyTheme};
