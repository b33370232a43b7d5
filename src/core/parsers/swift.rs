use anyhow::{Context, Result};
use tree_sitter::{Language, Parser, Tree};

/// Swift grammar handle shared by every analysis.
///
/// `Language` is a cheap, thread-safe reference to the compiled grammar, so a
/// single `SourceParser` can back parallel analyses. A fresh tree-sitter
/// `Parser` is created per call since parsers are stateful and not `Sync`.
#[derive(Clone)]
pub struct SourceParser {
    language: Language,
}

impl SourceParser {
    /// Load the Swift grammar and check the runtime accepts it.
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_swift::LANGUAGE.into();
        Parser::new()
            .set_language(&language)
            .context("Failed to load the tree-sitter Swift grammar")?;
        Ok(Self { language })
    }

    /// Parse Swift source code into a syntax tree.
    ///
    /// Malformed input still yields a tree (with `ERROR` nodes). `None` is only
    /// returned if the grammar is rejected, which `SourceParser::new` rules out.
    pub fn parse(&self, code: &str) -> Option<ParsedSource> {
        let mut parser = Parser::new();
        parser.set_language(&self.language).ok()?;
        let tree = parser.parse(code, None)?;

        Some(ParsedSource {
            tree,
            line_index: LineIndex::new(code),
        })
    }
}

pub struct ParsedSource {
    pub tree: Tree,
    pub line_index: LineIndex,
}

/// Maps absolute byte offsets to 1-based line/column pairs.
///
/// Lines are delimited by `\n`, matching tree-sitter's row counting. Columns
/// count bytes from the start of the line, so a `\r` before the newline or a
/// multi-byte character shifts columns the same way the parser does.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(code: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(code.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            line_starts,
            len: code.len(),
        }
    }

    /// Returns `(line, column)`, both 1-based. Offsets past the end clamp to
    /// the end of the buffer.
    pub fn offset_to_location(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        (line, offset - line_start + 1)
    }
}
