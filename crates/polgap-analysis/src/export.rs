//! # CSV Gap Report
//!
//! Tabular projection of a [`ComplianceReport`] for spreadsheet export:
//! one row per finding, in clause order. Fields are quoted per RFC 4180
//! only when they contain a comma, a double quote, or a line break.

use std::fmt::Write as _;

use crate::report::ComplianceReport;

/// CSV header row.
pub const CSV_HEADER: [&str; 6] = [
    "Gap Type",
    "Control ID",
    "Control Description",
    "Severity",
    "Priority",
    "Match Score",
];

/// Render the report's findings as CSV text (with a trailing newline).
pub fn gap_report_csv(report: &ComplianceReport) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().copied());

    for f in &report.findings {
        let score = format!("{:.2}", f.match_score);
        push_row(
            &mut out,
            [
                f.coverage.as_str(),
                f.clause_id.as_str(),
                f.title.as_str(),
                f.severity.as_str(),
                f.priority.as_str(),
                score.as_str(),
            ],
        );
    }
    out
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        // Writing to a String cannot fail.
        let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
    } else {
        out.push_str(field);
    }
}
