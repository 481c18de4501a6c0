//! Human-readable report formatter.

use super::{CheckResult, Report, ReportFormatter};
use crate::checks::FindingLevel;
use crate::ui::{OutputMode, StatusKind, VerifyTheme};
use std::io::Write;

const RULE_WIDTH: usize = 50;
const INDENT: &str = "   ";

/// Formats reports for terminal display.
pub struct HumanFormatter {
    theme: VerifyTheme,
    mode: OutputMode,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool, mode: OutputMode) -> Self {
        Self {
            theme: VerifyTheme::for_colors(use_color),
            mode,
        }
    }

    fn write_check<W: Write + ?Sized>(
        &self,
        check: &CheckResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            self.theme.format_step(check.index, &check.description)
        )?;

        for finding in &check.findings {
            let kind = StatusKind::from(finding.level);
            writeln!(
                writer,
                "{}{}",
                INDENT,
                kind.format(&self.theme, &finding.message)
            )?;
        }

        if let Some(diagnostic) = &check.diagnostic {
            // Diagnostics that merely repeat a failing finding add nothing.
            let repeated = check
                .findings
                .iter()
                .any(|f| f.level == FindingLevel::Fail && &f.message == diagnostic);
            if !repeated {
                for line in diagnostic.lines() {
                    writeln!(
                        writer,
                        "{}{}",
                        INDENT,
                        StatusKind::Failed.format(&self.theme, line)
                    )?;
                }
            }
        }

        if self.mode.shows_command_output() {
            if let Some(output) = &check.output {
                for line in output.lines() {
                    writeln!(
                        writer,
                        "{}{} {}",
                        INDENT,
                        self.theme.border.apply_to("│"),
                        self.theme.command.apply_to(line)
                    )?;
                }
            }
        }

        Ok(())
    }

    fn write_quiet_failure<W: Write + ?Sized>(
        &self,
        check: &CheckResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let reason = check
            .diagnostic
            .clone()
            .or_else(|| {
                check
                    .findings
                    .iter()
                    .find(|f| f.level == FindingLevel::Fail)
                    .map(|f| f.message.clone())
            })
            .unwrap_or_else(|| "failed".to_string());
        let first_line = reason.lines().next().unwrap_or_default();
        writeln!(
            writer,
            "{}",
            self.theme.format_error(&format!(
                "{}. {}: {}",
                check.index, check.description, first_line
            ))
        )
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        if self.mode.shows_details() {
            writeln!(
                writer,
                "{}",
                self.theme
                    .format_header(&format!("Verifying {}", report.title()))
            )?;
            writeln!(writer, "{}", self.theme.format_rule(RULE_WIDTH))?;

            for check in report.checks() {
                self.write_check(check, writer)?;
            }

            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.format_rule(RULE_WIDTH))?;
        } else {
            for check in report.checks().iter().filter(|c| !c.passed) {
                self.write_quiet_failure(check, writer)?;
            }
        }

        writeln!(
            writer,
            "Test Results: {}/{} tests passed",
            report.passed(),
            report.total()
        )?;

        if !self.mode.shows_details() {
            return Ok(());
        }

        if report.all_passed() {
            writeln!(writer, "{}", self.theme.format_success("All checks passed!"))?;
            if !report.install_commands().is_empty() {
                writeln!(writer)?;
                writeln!(
                    writer,
                    "{}",
                    self.theme.highlight.apply_to("Installation commands ready:")
                )?;
                for install in report.install_commands() {
                    writeln!(writer)?;
                    writeln!(writer, "{}{}:", INDENT, install.label)?;
                    writeln!(
                        writer,
                        "{}{}",
                        INDENT,
                        self.theme.command.apply_to(&install.command)
                    )?;
                }
            }
        } else {
            writeln!(writer, "{}", self.theme.format_error("Some checks failed"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckId, CheckOutcome, Finding};
    use crate::config::InstallCommand;
    use std::path::Path;
    use std::time::Duration;

    fn install_commands() -> Vec<InstallCommand> {
        vec![
            InstallCommand {
                label: "Unix/Linux/macOS".to_string(),
                command: "curl -fsSL https://example.com/install.sh | bash".to_string(),
            },
            InstallCommand {
                label: "Windows (PowerShell)".to_string(),
                command: "iwr -useb https://example.com/install.ps1 | iex".to_string(),
            },
        ]
    }

    fn render(report: &Report, mode: OutputMode) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false, mode)
            .format(report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn passing_report() -> Report {
        let mut report = Report::new("2DO", Path::new("/repo"), install_commands());
        for i in 0..5 {
            report.record(
                CheckId::new(format!("c{}", i)),
                &format!("Check {}", i),
                CheckOutcome::new(true, vec![Finding::pass(format!("ok {}", i))])
                    .with_output("detect_os function defined"),
                Duration::ZERO,
            );
        }
        report
    }

    #[test]
    fn formats_full_success() {
        let output = render(&passing_report(), OutputMode::Normal);

        assert!(output.contains("Verifying 2DO"));
        assert!(output.contains("1. Check 0..."));
        assert!(output.contains("   ✓ ok 0"));
        assert!(output.contains("Test Results: 5/5 tests passed"));
        assert!(output.contains("All checks passed!"));
        assert!(output.contains("curl -fsSL https://example.com/install.sh | bash"));
        assert!(output.contains("iwr -useb https://example.com/install.ps1 | iex"));
    }

    #[test]
    fn captured_output_only_in_verbose() {
        let report = passing_report();

        assert!(!render(&report, OutputMode::Normal).contains("│"));
        assert!(render(&report, OutputMode::Verbose).contains("│ detect_os function defined"));
    }

    #[test]
    fn formats_failure_with_diagnostic() {
        let mut report = Report::new("2DO", Path::new("/repo"), install_commands());
        report.record(
            CheckId::new("installer-syntax"),
            "Checking script syntax",
            CheckOutcome::new(false, vec![Finding::fail("install.sh syntax error")])
                .with_diagnostic("line 4: unexpected end of file"),
            Duration::ZERO,
        );

        let output = render(&report, OutputMode::Normal);

        assert!(output.contains("✗ install.sh syntax error"));
        assert!(output.contains("✗ line 4: unexpected end of file"));
        assert!(output.contains("Test Results: 0/1 tests passed"));
        assert!(output.contains("Some checks failed"));
        assert!(!output.contains("Installation commands ready"));
    }

    #[test]
    fn repeated_diagnostic_is_printed_once() {
        let mut report = Report::new("2DO", Path::new("/repo"), vec![]);
        report.record(
            CheckId::new("documentation"),
            "Checking documentation",
            CheckOutcome::failed("README.md not found"),
            Duration::ZERO,
        );

        let output = render(&report, OutputMode::Normal);

        assert_eq!(output.matches("README.md not found").count(), 1);
    }

    #[test]
    fn quiet_mode_lists_failures_and_summary() {
        let mut report = passing_report();
        report.record(
            CheckId::new("documentation"),
            "Checking documentation",
            CheckOutcome::failed("README.md not found"),
            Duration::ZERO,
        );

        let output = render(&report, OutputMode::Quiet);

        assert!(output.contains("✗ 6. Checking documentation: README.md not found"));
        assert!(output.contains("Test Results: 5/6 tests passed"));
        assert!(!output.contains("Check 0"));
        assert!(!output.contains("Some checks failed"));
    }
}
