//! Visual theme and styling.

use console::Style;

/// Report styling.
#[derive(Debug, Clone)]
pub struct VerifyTheme {
    /// Style for passing checks and findings (green).
    pub success: Style,
    /// Style for informational notes (orange).
    pub warning: Style,
    /// Style for failures (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the banner (magenta bold).
    pub header: Style,
    /// Style for check numbers (dim).
    pub step_number: Style,
    /// Style for install commands and captured output (dim italic).
    pub command: Style,
    /// Style for horizontal rules (dim).
    pub border: Style,
}

impl Default for VerifyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VerifyTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            step_number: Style::new().dim(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            step_number: Style::new(),
            command: Style::new(),
            border: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(use_colors: bool) -> Self {
        if use_colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a check heading: `N. description...`.
    pub fn format_step(&self, index: usize, description: &str) -> String {
        format!(
            "{} {}",
            self.step_number.apply_to(format!("{}.", index)),
            self.highlight.apply_to(format!("{}...", description))
        )
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▶"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a horizontal rule of `width` characters.
    pub fn format_rule(&self, width: usize) -> String {
        format!("{}", self.border.apply_to("=".repeat(width)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
