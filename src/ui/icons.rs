//! Status icons for findings and check results.

use super::theme::VerifyTheme;
use crate::checks::FindingLevel;

/// Status kinds used in report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Condition holds.
    Success,
    /// Condition failed.
    Failed,
    /// Informational.
    Info,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Info => "•",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &VerifyTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Info => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &VerifyTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<FindingLevel> for StatusKind {
    fn from(level: FindingLevel) -> Self {
        match level {
            FindingLevel::Pass => Self::Success,
            FindingLevel::Fail => Self::Failed,
            FindingLevel::Note => Self::Info,
        }
    }
}
