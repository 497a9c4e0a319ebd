//! Output formatters for ptxdiff
//!
//! Supports HTML-fragment markup (the report's native form), colored terminal
//! text, and JSON output.

use crate::report::{text_report, DiffReport};
use colored::Colorize;
use std::io::{self, Write};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML-fragment markup for embedding in a report page
    #[default]
    Html,
    /// Colored text output for terminal
    Text,
    /// JSON output for tooling and CI
    Json,
}

/// Format a diff report as HTML-fragment markup
#[must_use]
pub fn format_html(report: &DiffReport) -> String {
    text_report(report)
}

/// Format a diff report as colored text for terminal
#[must_use]
pub fn format_text(report: &DiffReport) -> String {
    let mut output = String::new();

    if !report.new_kernels.is_empty() {
        output.push_str(&format!(
            "{} {}\n",
            "New Kernels Found:".green().bold(),
            report.new_kernels.join(", ")
        ));
    }
    if !report.removed_kernels.is_empty() {
        output.push_str(&format!(
            "{} {}\n",
            "Removed Kernels:".red().bold(),
            report.removed_kernels.join(", ")
        ));
    }

    for change in &report.changed_kernels {
        output.push_str(&format!(
            "{}\n",
            format!("Changes in {}:", change.kernel).white().bold()
        ));
        for line in change.instruction_diff.split('\n') {
            if line.starts_with('+') {
                output.push_str(&format!("  {}\n", line.green()));
            } else if line.starts_with('-') {
                output.push_str(&format!("  {}\n", line.red()));
            } else {
                output.push_str(&format!("  {line}\n"));
            }
        }
    }

    output
}

/// Format a diff report as JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn format_json(report: &DiffReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write report to stdout in the specified format
///
/// # Errors
///
/// Returns `io::Error` if writing to stdout fails or JSON serialization fails.
pub fn write_report(report: &DiffReport, format: OutputFormat) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    match format {
        OutputFormat::Html => {
            writeln!(stdout, "{}", format_html(report))?;
        }
        OutputFormat::Text => {
            write!(stdout, "{}", format_text(report))?;
        }
        OutputFormat::Json => {
            let json = format_json(report).map_err(io::Error::other)?;
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
