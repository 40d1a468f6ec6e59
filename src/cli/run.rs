//! Run command implementation
//!
//! This module implements the `fixerset run` command, which:
//! - Loads configuration from fixerset.toml
//! - Reads the preset and rule metadata from the configured snapshots
//! - Translates the preset into rule groups
//! - Renders the groups as a PHP literal and splices it into the target file
//!
//! Nothing is written if any step fails.

use crate::cli::common::{EXIT_CHANGED, EXIT_ERROR, EXIT_SUCCESS};
use crate::config::Config;
use crate::error::FixersetError;
use crate::output::patch::plan_patch;
use crate::output::{Marker, PatchOutcome, render_literal};
use crate::source::PresetSource;
use std::path::{Path, PathBuf};

/// How the run command treats the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Rewrite the generated block
    Write,
    /// Report whether the block is out of date without writing
    Check,
    /// Print the generated block without writing
    DryRun,
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The target file was rewritten
    Updated,
    /// The generated block already matched
    Unchanged,
    /// Check mode found a stale block
    OutOfDate,
    /// Dry-run output: the rendered literal
    Preview(String),
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub target: PathBuf,
    pub outcome: RunOutcome,
}

/// Run the run command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (file written, already current, or previewed)
/// - 1: Check mode found the file out of date
/// - 2: Error (configuration, source, translation, or write)
pub fn run(config_path: Option<&Path>, mode: RunMode) -> i32 {
    match run_inner(config_path, mode) {
        Ok(report) => {
            print_report(&report);
            match report.outcome {
                RunOutcome::OutOfDate => EXIT_CHANGED,
                _ => EXIT_SUCCESS,
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_inner(config_path: Option<&Path>, mode: RunMode) -> Result<RunReport, FixersetError> {
    let config = super::common::load_config(config_path)?;
    let source = super::common::build_source(&config);
    execute(&config, source.as_ref(), mode)
}

/// Translate the configured preset and apply it to the target file
///
/// # Errors
///
/// Any configuration, source, translation, or write error. The target file
/// is untouched on error.
pub fn execute(
    config: &Config,
    source: &dyn PresetSource,
    mode: RunMode,
) -> Result<RunReport, FixersetError> {
    let marker = Marker::constant(&config.target.constant)?;
    let translator = super::common::build_translator(config)?;

    let document = translator.translate(source, &config.fixerset.preset)?;
    let literal = render_literal(&document, &config.target.indent);

    let target = config.target.path.clone();
    let patch = plan_patch(&target, &marker, &literal)?;

    let outcome = match mode {
        RunMode::Write => match patch.apply()? {
            PatchOutcome::Updated => RunOutcome::Updated,
            PatchOutcome::Unchanged => RunOutcome::Unchanged,
        },
        RunMode::Check if patch.is_changed() => RunOutcome::OutOfDate,
        RunMode::Check => RunOutcome::Unchanged,
        RunMode::DryRun => RunOutcome::Preview(literal),
    };

    Ok(RunReport { target, outcome })
}

fn print_report(report: &RunReport) {
    let path = report.target.display();
    match &report.outcome {
        RunOutcome::Updated => println!("Updated {}", path),
        RunOutcome::Unchanged => println!("{} is up to date", path),
        RunOutcome::OutOfDate => eprintln!("{} is out of date. Run 'fixerset run'.", path),
        RunOutcome::Preview(literal) => println!("{}", literal),
    }
}
