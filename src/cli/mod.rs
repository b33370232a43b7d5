//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: `check` and `init` implementations
//! - `report`: text and JSON output
//! - `exit_status`: process exit codes

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::run_cli;
