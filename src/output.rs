//! Console formatting for projectinfo run reports.
//!
//! Provides functions to format a [`ManifestReport`] as plain text or JSON.

use crate::{ManifestReport, ProjectInfoError};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Formats the run report into a string.
pub fn format_report(
    report: &ManifestReport,
    format: ReportFormat,
    pretty: bool,
) -> Result<String, ProjectInfoError> {
    match format {
        ReportFormat::Text => Ok(format_text(report)),
        ReportFormat::Json => format_json(report, pretty),
    }
}

// ----------------------- Internal formatting -----------------------

fn format_text(report: &ManifestReport) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(&format!("Wrote {}\n", report.output.display()));
    out.push_str(&format!("Files: {}\n", report.files.len()));
    for file in &report.files {
        out.push_str(&format!("  {}\n", file.title));
    }
    if !report.diagnostics.is_empty() {
        out.push_str(&format!("Diagnostics: {}\n", report.diagnostics.len()));
        for diagnostic in &report.diagnostics {
            out.push_str(&format!("  {}\n", diagnostic));
        }
    }
    out
}

fn format_json(report: &ManifestReport, pretty: bool) -> Result<String, ProjectInfoError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.map_err(|e| ProjectInfoError::Serialize(e.to_string()))
}
