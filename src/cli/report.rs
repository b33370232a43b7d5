//! Report formatting and printing utilities.
//!
//! The text report keeps the layout consumed by Xcode build logs: a count line
//! followed by each diagnostic, separated by a blank line. Diagnostics are
//! never colored so they stay byte-for-byte stable.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::args::OutputFormat;
use super::commands::CommandResult;
use crate::issues::DetectedCall;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result to stdout and, in verbose mode, a summary to stderr.
pub fn print(result: &CommandResult, format: OutputFormat, verbose: bool) -> Result<()> {
    print_to(result, format, &mut io::stdout().lock())?;
    if verbose {
        print_summary_to(result, &mut io::stderr().lock());
    }
    Ok(())
}

/// Print the result to a custom writer.
pub fn print_to<W: Write>(
    result: &CommandResult,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(result, writer),
        OutputFormat::Json => write_json(&result.calls, writer),
    }
}

fn write_text<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    writeln!(writer, "{} violations found.", result.violation_count)?;

    if !result.calls.is_empty() {
        let diagnostics: Vec<String> = result.calls.iter().map(ToString::to_string).collect();
        writeln!(writer, "{}", diagnostics.join("\n\n"))?;
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonCall<'a> {
    file: &'a str,
    line: usize,
    column: usize,
    severity: String,
    kind: String,
    message: String,
    source_line: &'a str,
}

impl<'a> From<&'a DetectedCall> for JsonCall<'a> {
    fn from(call: &'a DetectedCall) -> Self {
        Self {
            file: &call.location.file,
            line: call.location.line,
            column: call.location.column,
            severity: call.severity().to_string(),
            kind: call.kind.to_string(),
            message: call.message(),
            source_line: &call.source_line,
        }
    }
}

fn write_json<W: Write>(calls: &[DetectedCall], writer: &mut W) -> Result<()> {
    let records: Vec<JsonCall> = calls.iter().map(JsonCall::from).collect();
    let json = serde_json::to_string_pretty(&records).context("Failed to serialize report.")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Print a one-line summary of the run.
pub fn print_summary_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let files = format!(
        "{} {}",
        result.files_checked,
        if result.files_checked == 1 {
            "file"
        } else {
            "files"
        }
    );

    let msg = if result.violation_count == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} - no violations found", files).green()
        )
    } else {
        format!(
            "{} Checked {} - {} {}",
            FAILURE_MARK.red(),
            files,
            result.violation_count,
            if result.violation_count == 1 {
                "violation"
            } else {
                "violations"
            }
            .red()
        )
    };
    let _ = writeln!(writer, "{}", msg);

    if result.unreadable_count > 0 || result.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read, {} path(s) could not be accessed",
            "warning:".bold().yellow(),
            result.unreadable_count,
            result.skipped_count
        );
    }
}
