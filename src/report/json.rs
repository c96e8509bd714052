//! JSON output for the status report.
//!
//! Serializes StatusReport for scripting and piping.

use super::StatusReport;

pub fn render(report: &StatusReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| String::from("{}"))
}
