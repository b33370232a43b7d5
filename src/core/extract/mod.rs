//! Extraction: per-file call detection.
//!
//! The visitor turns a parsed syntax tree into offset-tagged `Finding`s. The
//! offsets are resolved to line/column positions by `core::resolve`.

pub mod visitor;

pub use visitor::CallVisitor;
