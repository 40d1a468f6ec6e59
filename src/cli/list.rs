//! List command implementation
//!
//! This module implements the `fixerset list` command, which translates the
//! configured preset and prints the resulting groups without touching the
//! target file.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::Config;
use crate::engine::OutputDocument;
use crate::error::FixersetError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::source::PresetSource;
use std::path::Path;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
pub fn run_list(
    config_path: Option<&Path>,
    format: OutputFormat,
    color: termcolor::ColorChoice,
) -> i32 {
    match run_list_inner(config_path, format, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_list_inner(
    config_path: Option<&Path>,
    format: OutputFormat,
    color: termcolor::ColorChoice,
) -> Result<(), FixersetError> {
    let config = super::common::load_config(config_path)?;
    let source = super::common::build_source(&config);
    let document = translate(&config, source.as_ref())?;

    match format {
        OutputFormat::Human => HumanFormatter::new().write_to_stdout(&document, color)?,
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(&document),
    }
    Ok(())
}

/// Translate the configured preset
pub(crate) fn translate(
    config: &Config,
    source: &dyn PresetSource,
) -> Result<OutputDocument, FixersetError> {
    let translator = super::common::build_translator(config)?;
    translator.translate(source, &config.fixerset.preset)
}
