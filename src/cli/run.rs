use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init},
    exit_status::ExitStatus,
    report,
};

/// Main entry point for the bundlelint CLI.
///
/// Dispatches to the command handler and prints the report.
///
/// # Returns
/// - `Ok(ExitStatus)` describing the outcome (violations found or not)
/// - `Err` if the command fails (e.g., missing path, invalid config)
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(command) = args.into_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Check(cmd) => {
            let result = check(&cmd)?;
            report::print(&result, cmd.format, verbose)?;
            Ok(ExitStatus::from_result(&result))
        }
        Command::Init => init(),
    }
}
