//! Source parsers.
//!
//! - `swift`: Swift source parser (tree-sitter grammar) and the offset to
//!   line/column map used to resolve findings

pub mod swift;

pub use swift::{LineIndex, ParsedSource, SourceParser};
