//! Common helper functions shared across CLI commands
//!
//! Loading configuration and building the preset source and translator.

use crate::config::Config;
use crate::engine::Translator;
use crate::error::{ConfigError, RuleError};
use crate::rules::RuleCatalog;
use crate::source::{FileSource, PresetSource};
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHANGED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default configuration file name
pub const CONFIG_FILE: &str = "fixerset.toml";

/// Load fixerset.toml
///
/// With no explicit path, `./fixerset.toml` is used if present and the
/// built-in defaults otherwise. An explicit path must exist.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                Config::load(default_path)
            } else {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Build the preset source described by the configuration
pub(crate) fn build_source(config: &Config) -> Box<dyn PresetSource> {
    let source = &config.source;
    tracing::debug!(
        presets = %source.presets.display(),
        fixers = %source.fixers.display(),
        "using snapshot source"
    );
    Box::new(FileSource::new(
        source.presets.clone(),
        source.fixers.clone(),
    ))
}

/// Build a translator over the built-in catalog and the configured labels
///
/// # Errors
///
/// Returns `RuleError::InvalidCatalog` if the embedded catalog is malformed.
pub(crate) fn build_translator(config: &Config) -> Result<Translator, RuleError> {
    let catalog = RuleCatalog::builtin()?;
    tracing::debug!(entries = catalog.len(), "loaded rule catalog");
    Ok(Translator::new(catalog, config.labels()))
}
