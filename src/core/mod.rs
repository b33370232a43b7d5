//! Core analysis engine.
//!
//! Analysis of one source unit runs as a three-step pipeline:
//!
//! 1. **Parse** (`parsers`): source text to a tree-sitter syntax tree plus a
//!    line index
//! 2. **Extract** (`extract`): walk the tree, classify each call to the target
//!    function, and emit offset-tagged findings
//! 3. **Resolve** (`resolve`): turn offsets into `file:line:column` locations
//!    with the offending source line
//!
//! `linter` composes the three; `file_scanner` supplies the files to analyze.

pub mod extract;
pub mod file_scanner;
pub mod linter;
pub mod parsers;
pub mod resolve;

pub use linter::{Linter, STDIN_FILE_NAME};
