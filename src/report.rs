//! Diff report formatting
//!
//! Consumes a precomputed kernel diff report and emits HTML-fragment markup
//! (`<span>`/`<h3>` lines) for embedding in a larger document. The caller
//! owns the document shell, the CSS classes, and HTML-escaping; nothing here
//! escapes markup-significant characters.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-kernel change entry: the kernel name and its line-oriented diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelChange {
    /// Kernel whose instruction listing changed
    pub kernel: String,
    /// Multi-line unified-style diff: `+` prefix adds, `-` removes,
    /// anything else is context
    pub instruction_diff: String,
}

/// Result of comparing two PTX versions, produced by an external differ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Kernels present only in the newer version
    pub new_kernels: Vec<String>,
    /// Kernels present only in the older version
    pub removed_kernels: Vec<String>,
    /// Changed kernels, in the order the differ emitted them
    pub changed_kernels: Vec<KernelChange>,
}

/// Load a diff report from a JSON file
pub fn load_diff_report(path: &Path) -> Result<DiffReport> {
    let contents = std::fs::read_to_string(path)?;
    let report = serde_json::from_str(&contents)?;
    Ok(report)
}

/// Format a diff report as HTML-fragment markup, one element per line.
///
/// Added/removed kernel summaries come first, then a heading plus classified
/// diff lines per changed kernel. Diff lines are split on `'\n'` literally,
/// so an empty line (or an empty trailing segment after a final newline) is
/// emitted as a context line.
#[must_use]
pub fn text_report(diff_report: &DiffReport) -> String {
    let mut lines = Vec::new();

    if !diff_report.new_kernels.is_empty() {
        lines.push(format!(
            "<span class='added'>New Kernels Found: {}</span>",
            diff_report.new_kernels.join(", ")
        ));
    }
    if !diff_report.removed_kernels.is_empty() {
        lines.push(format!(
            "<span class='removed'>Removed Kernels: {}</span>",
            diff_report.removed_kernels.join(", ")
        ));
    }

    for change in &diff_report.changed_kernels {
        lines.push(format!("<h3>Changes in {}:</h3>", change.kernel));
        for line in change.instruction_diff.split('\n') {
            if line.starts_with('+') {
                lines.push(format!("<span class='added'>{line}</span>"));
            } else if line.starts_with('-') {
                lines.push(format!("<span class='removed'>{line}</span>"));
            } else {
                lines.push(format!("<span class='line-number'>{line}</span>"));
            }
        }
    }

    lines.join("\n")
}
