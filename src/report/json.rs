//! JSON report formatter.
//!
//! Emits a machine-readable report for CI tooling.

use super::{Report, ReportFormatter};
use crate::checks::Finding;
use serde::Serialize;
use std::io::Write;

/// Formats reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    project_root: String,
    started_at: String,
    checks: Vec<JsonCheck<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    index: usize,
    id: &'a str,
    description: &'a str,
    passed: bool,
    findings: &'a [Finding],
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    duration_ms: u128,
}

#[derive(Serialize)]
struct JsonSummary {
    passed: usize,
    total: usize,
    success: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write + ?Sized>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            title: report.title(),
            project_root: report.project_root().display().to_string(),
            started_at: report.started_at().to_rfc3339(),
            checks: report
                .checks()
                .iter()
                .map(|c| JsonCheck {
                    index: c.index,
                    id: &c.id.0,
                    description: &c.description,
                    passed: c.passed,
                    findings: &c.findings,
                    diagnostic: c.diagnostic.as_deref(),
                    output: c.output.as_deref(),
                    duration_ms: c.duration.as_millis(),
                })
                .collect(),
            summary: JsonSummary {
                passed: report.passed(),
                total: report.total(),
                success: report.all_passed(),
            },
        };

        let json = serde_json::to_string_pretty(&output)?;
        writeln!(writer, "{}", json)
    }
}
