//! Resolution: attaching human-readable positions to findings.
//!
//! Each `Finding` carries an absolute byte offset. Resolution maps it to a
//! 1-based `file:line:column` location and pulls the matching line out of the
//! original text for display. The mapping is total and order-preserving: one
//! `DetectedCall` per `Finding`, in the same order.

use crate::core::parsers::LineIndex;
use crate::issues::{DetectedCall, Finding, Location};

pub fn resolve_findings(
    findings: &[Finding],
    line_index: &LineIndex,
    source: &str,
    file_path: &str,
    label: &str,
) -> Vec<DetectedCall> {
    let lines: Vec<&str> = source.lines().collect();

    findings
        .iter()
        .map(|finding| {
            let (line, column) = line_index.offset_to_location(finding.offset);
            DetectedCall {
                kind: finding.kind,
                location: Location {
                    file: file_path.to_string(),
                    line,
                    column,
                },
                source_line: source_line(&lines, line),
                label: label.to_string(),
            }
        })
        .collect()
}

/// Line `line` (1-based), or empty if the index is past the end.
fn source_line(lines: &[&str], line: usize) -> String {
    line.checked_sub(1)
        .and_then(|index| lines.get(index))
        .map(|text| text.to_string())
        .unwrap_or_default()
}
