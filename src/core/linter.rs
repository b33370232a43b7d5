//! The linter facade: parse, visit, resolve.
//!
//! ```ignore
//! let linter = Linter::new(CallPattern::default())?;
//! for call in linter.lint(source, "Sources/App/Strings.swift") {
//!     println!("{call}");
//! }
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::config::CallPattern;
use crate::core::{extract::CallVisitor, parsers::SourceParser, resolve::resolve_findings};
use crate::issues::DetectedCall;

/// Display name used when the source does not come from a file.
pub const STDIN_FILE_NAME: &str = "<stdin>";

/// Detects calls to the configured function in Swift source.
///
/// Holds no per-analysis state: every method is a pure function of its
/// input, and a `Linter` can be shared across threads.
#[derive(Clone)]
pub struct Linter {
    parser: SourceParser,
    pattern: CallPattern,
}

impl Linter {
    pub fn new(pattern: CallPattern) -> Result<Self> {
        Ok(Self {
            parser: SourceParser::new()?,
            pattern,
        })
    }

    /// Every call to the target function, valid ones included, in document order.
    pub fn detect_calls(&self, source: &str, file_path: &str) -> Vec<DetectedCall> {
        let Some(parsed) = self.parser.parse(source) else {
            return Vec::new();
        };

        let findings = CallVisitor::new(&self.pattern, source).visit(parsed.tree.root_node());

        resolve_findings(
            &findings,
            &parsed.line_index,
            source,
            file_path,
            &self.pattern.required_label,
        )
    }

    /// Same as `detect_calls`, keeping only the violations.
    pub fn lint(&self, source: &str, file_path: &str) -> Vec<DetectedCall> {
        self.detect_calls(source, file_path)
            .into_iter()
            .filter(|call| call.kind.is_violation())
            .collect()
    }

    pub fn detect_calls_in_file(&self, path: &Path) -> Result<Vec<DetectedCall>> {
        let source = read_source(path)?;
        Ok(self.detect_calls(&source, &path.to_string_lossy()))
    }

    pub fn lint_file(&self, path: &Path) -> Result<Vec<DetectedCall>> {
        let source = read_source(path)?;
        Ok(self.lint(&source, &path.to_string_lossy()))
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
