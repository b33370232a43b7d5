//! bundlelint - NSLocalizedString bundle checker for Swift packages
//!
//! Code in a Swift package that calls `NSLocalizedString` without
//! `bundle: .module` looks up strings in the main bundle and silently falls
//! back to the key. bundlelint parses Swift sources, finds every such call and
//! reports it as an Xcode-style diagnostic.
//!
//! ```ignore
//! use bundlelint::{config::CallPattern, core::Linter};
//!
//! let linter = Linter::new(CallPattern::default())?;
//! let violations = linter.lint(r#"NSLocalizedString("key", comment: "")"#, "<stdin>");
//! assert_eq!(violations.len(), 1);
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and the call pattern
//! - `core`: Analysis engine (parse, extract, resolve)
//! - `issues`: Detected call types and diagnostic rendering

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
