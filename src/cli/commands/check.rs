use std::{env, path::PathBuf};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::super::args::CheckCommand;
use super::CommandResult;
use crate::{
    config::{Config, ConfigLoadResult, load_config},
    core::{
        Linter,
        file_scanner::{ScanOptions, scan_files},
    },
    issues::DetectedCall,
};

pub fn check(cmd: &CheckCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;
    let ConfigLoadResult {
        config,
        from_file,
        base_dir,
    } = load_config(&env::current_dir()?)?;
    let config = apply_overrides(config, cmd);
    config.validate()?;

    if verbose && !from_file {
        eprintln!("{} No config file found, using defaults", "info:".bold().cyan());
    }

    let linter = Linter::new(config.call_pattern())?;
    let options = ScanOptions {
        extensions: config.extensions.clone(),
        ignores: config.ignores.clone(),
        base_dir,
        verbose,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;
    for path in &cmd.paths {
        let scan = scan_files(path, &options)?;
        files.extend(scan.files);
        skipped_count += scan.skipped_count;
    }
    files.sort();
    files.dedup();

    // Each file is independent; collect keeps the sorted order.
    let outcomes: Vec<(PathBuf, Result<Vec<DetectedCall>>)> = files
        .into_par_iter()
        .map(|file| {
            if verbose {
                eprintln!("Parsing: {}...", file.display());
            }
            let calls = if cmd.all {
                linter.detect_calls_in_file(&file)
            } else {
                linter.lint_file(&file)
            };
            (file, calls)
        })
        .collect();

    let files_checked = outcomes.len();
    let mut calls = Vec::new();
    let mut unreadable_count = 0;

    for (file, outcome) in outcomes {
        match outcome {
            Ok(found) => calls.extend(found),
            Err(e) => {
                unreadable_count += 1;
                eprintln!(
                    "{} Skipping {}: {:#}",
                    "warning:".bold().yellow(),
                    file.display(),
                    e
                );
            }
        }
    }

    let violation_count = calls.iter().filter(|c| c.kind.is_violation()).count();

    Ok(CommandResult {
        calls,
        violation_count,
        files_checked,
        unreadable_count,
        skipped_count,
    })
}

fn apply_overrides(mut config: Config, cmd: &CheckCommand) -> Config {
    if let Some(function) = &cmd.target_function {
        config.target_function = function.clone();
    }
    if let Some(label) = &cmd.required_label {
        config.required_label = label.clone();
    }
    if !cmd.accepted_values.is_empty() {
        config.accepted_values = cmd.accepted_values.clone();
    }
    config
}
