//! Call detection over the Swift syntax tree.
//!
//! `CallVisitor` walks every node of a parsed file in document order and
//! classifies each call to the configured target function:
//!
//! ```swift
//! NSLocalizedString("k", bundle: .module, comment: "")  // Valid, at the call
//! NSLocalizedString("k", comment: "")                   // Missing, at the call
//! NSLocalizedString("k", bundle: .main, comment: "")    // Invalid, at `bundle:`
//! ```
//!
//! Comments and string literals are inert: they never contain
//! `call_expression` nodes, so calls written inside them are not reported.

use std::ops::Range;

use tree_sitter::Node;

use crate::config::CallPattern;
use crate::issues::{DiagnosticKind, Finding};

const CALL_EXPRESSION: &str = "call_expression";
const CALL_SUFFIX: &str = "call_suffix";
const VALUE_ARGUMENTS: &str = "value_arguments";
const VALUE_ARGUMENT: &str = "value_argument";
const VALUE_ARGUMENT_LABEL: &str = "value_argument_label";
const SIMPLE_IDENTIFIER: &str = "simple_identifier";
const COMMENT_KINDS: &[&str] = &["comment", "multiline_comment"];

pub struct CallVisitor<'a> {
    pattern: &'a CallPattern,
    source: &'a str,
    findings: Vec<Finding>,
}

impl<'a> CallVisitor<'a> {
    pub fn new(pattern: &'a CallPattern, source: &'a str) -> Self {
        Self {
            pattern,
            source,
            findings: Vec::new(),
        }
    }

    /// Walk `root` pre-order, depth-first, and return one finding per
    /// matching call in document order.
    pub fn visit(mut self, root: Node) -> Vec<Finding> {
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();
            if node.kind() == CALL_EXPRESSION {
                self.visit_call(node);
            }

            // Always descend: arguments of any call may hold further target calls.
            if cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return self.findings;
                }
            }
        }
    }

    fn visit_call(&mut self, call: Node) {
        if !self.is_target_callee(call) {
            return;
        }

        let Some(argument) = self.find_labeled_argument(call) else {
            self.push(DiagnosticKind::MissingRequiredArgument, call);
            return;
        };

        let value = argument_value(argument)
            .map(|value| self.trimmed_text(value))
            .unwrap_or_default();

        if self.pattern.accepts(&value) {
            self.push(DiagnosticKind::Valid, call);
        } else {
            self.push(DiagnosticKind::InvalidRequiredArgumentValue, argument);
        }
    }

    /// The callee must be a bare identifier; `Foundation.NSLocalizedString(...)`
    /// or `self.NSLocalizedString(...)` are not matched.
    fn is_target_callee(&self, call: Node) -> bool {
        let mut cursor = call.walk();
        let callee = call.named_children(&mut cursor).next();

        matches!(
            callee,
            Some(callee)
                if callee.kind() == SIMPLE_IDENTIFIER
                    && self.text(callee) == self.pattern.function_name
        )
    }

    /// First argument (in declaration order) labeled with the required name.
    fn find_labeled_argument<'t>(&self, call: Node<'t>) -> Option<Node<'t>> {
        let arguments = child_of_kind(call, CALL_SUFFIX)
            .and_then(|suffix| child_of_kind(suffix, VALUE_ARGUMENTS))?;

        let mut cursor = arguments.walk();
        let argument = arguments
            .named_children(&mut cursor)
            .filter(|node| node.kind() == VALUE_ARGUMENT)
            .find(|argument| {
                argument_label(*argument)
                    .is_some_and(|label| self.text(label).trim() == self.pattern.required_label)
            });
        argument
    }

    /// Source text of `node` with any comments inside it removed, trimmed.
    ///
    /// Interior whitespace is kept, so `Bundle . module` does not match
    /// `Bundle.module`.
    fn trimmed_text(&self, node: Node) -> String {
        let mut text = String::new();
        let mut start = node.start_byte();

        for comment in comment_ranges(node) {
            text.push_str(self.slice(start..comment.start));
            start = comment.end;
        }
        text.push_str(self.slice(start..node.end_byte()));

        text.trim().to_string()
    }

    fn text(&self, node: Node) -> &'a str {
        self.slice(node.byte_range())
    }

    fn slice(&self, range: Range<usize>) -> &'a str {
        self.source.get(range).unwrap_or_default()
    }

    fn push(&mut self, kind: DiagnosticKind, node: Node) {
        self.findings.push(Finding {
            kind,
            offset: node.start_byte(),
        });
    }
}

fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == kind);
    child
}

fn argument_label(argument: Node) -> Option<Node> {
    argument
        .child_by_field_name("name")
        .or_else(|| child_of_kind(argument, VALUE_ARGUMENT_LABEL))
}

/// The argument's expression: the `value` field, or else the last named
/// child that is neither the label nor a comment.
fn argument_value(argument: Node) -> Option<Node> {
    if let Some(value) = argument.child_by_field_name("value") {
        return Some(value);
    }

    let mut cursor = argument.walk();
    let value = argument
        .named_children(&mut cursor)
        .filter(|child| {
            child.kind() != VALUE_ARGUMENT_LABEL
                && child.kind() != "type_modifiers"
                && !COMMENT_KINDS.contains(&child.kind())
        })
        .last();
    value
}

/// Byte ranges of the outermost comment nodes below `node`, in order.
fn comment_ranges(node: Node) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        if COMMENT_KINDS.contains(&current.kind()) {
            ranges.push(current.byte_range());
            continue;
        }
        let mut cursor = current.walk();
        stack.extend(current.children(&mut cursor));
    }

    ranges.sort_by_key(|range| range.start);
    ranges
}
