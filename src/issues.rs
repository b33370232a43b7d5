//! Issue types for localization call analysis results.
//!
//! This module defines the classification of every detected call and the
//! resolved, user-facing form of a detection. Each `DetectedCall` is
//! self-contained with all information needed by the reporter:
//! - `Display` renders the compiler-style diagnostic (`file:line:col: severity: message`)
//! - the JSON reporter serializes its fields

use std::fmt;

// ============================================================
// Severity and Kind
// ============================================================

/// Severity level of a detected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Classification of a call to the target function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The required argument is present with an accepted value.
    Valid,
    /// The required argument label does not appear in the call.
    MissingRequiredArgument,
    /// The required argument is present but its value is not accepted.
    InvalidRequiredArgumentValue,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::Valid => Severity::Note,
            DiagnosticKind::MissingRequiredArgument
            | DiagnosticKind::InvalidRequiredArgumentValue => Severity::Error,
        }
    }

    pub fn is_violation(self) -> bool {
        self != DiagnosticKind::Valid
    }

    /// Human-readable message for this kind, mentioning the required label.
    pub fn message(self, label: &str) -> String {
        match self {
            DiagnosticKind::Valid => "Valid call".to_string(),
            DiagnosticKind::MissingRequiredArgument => format!("Missing parameter `{}:`", label),
            DiagnosticKind::InvalidRequiredArgumentValue => {
                format!("Incorrect value for parameter `{}:`", label)
            }
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Valid => write!(f, "valid"),
            DiagnosticKind::MissingRequiredArgument => write!(f, "missing-argument"),
            DiagnosticKind::InvalidRequiredArgumentValue => write!(f, "invalid-argument-value"),
        }
    }
}

// ============================================================
// Detection results
// ============================================================

/// A call detected during traversal, before its offset is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub kind: DiagnosticKind,
    /// Absolute byte offset in the source buffer.
    pub offset: usize,
}

/// A resolved `file:line:column` triple. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

/// A call to the target function, resolved against the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedCall {
    pub kind: DiagnosticKind,
    pub location: Location,
    /// Text of the line containing `location.line`, or empty if out of range.
    pub source_line: String,
    /// Name of the required argument, used to render the message.
    pub label: String,
}

impl DetectedCall {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn message(&self) -> String {
        self.kind.message(&self.label)
    }
}

/// Renders the diagnostic in the layout Xcode and log scrapers understand:
///
/// ```text
/// file.swift:1:11: error: Missing parameter `bundle:`
/// let str = NSLocalizedString("key", value: "value", comment: "comment")
///           ^
/// ```
impl fmt::Display for DetectedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Location { file, line, column } = &self.location;
        writeln!(
            f,
            "{}:{}:{}: {}: {}",
            file,
            line,
            column,
            self.severity(),
            self.message()
        )?;
        writeln!(f, "{}", self.source_line)?;
        write!(f, "{:padding$}^", "", padding = column.saturating_sub(1))
    }
}
