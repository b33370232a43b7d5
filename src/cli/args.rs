//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report calls to the localization function that miss the
//!   required argument or pass an unaccepted value
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Return the command if one was provided, otherwise print help.
    pub fn into_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by analysis commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:col: severity: message` diagnostics
    #[default]
    Text,
    /// A JSON array of detected calls
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Swift files or directories to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Also report valid calls (as notes)
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Function to look for (overrides config file)
    #[arg(long = "function")]
    pub target_function: Option<String>,

    /// Required argument label (overrides config file)
    #[arg(long = "label")]
    pub required_label: Option<String>,

    /// Accepted argument value, can be repeated (overrides config file)
    #[arg(long = "accept")]
    pub accepted_values: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check Swift sources for NSLocalizedString calls without `bundle: .module`
    Check(CheckCommand),
    /// Initialize a new .bundlelintrc.json configuration file
    Init,
}
