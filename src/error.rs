//! Error types for fixerset
//!
//! This module defines the error types used throughout fixerset, following
//! a hierarchical structure with one enum per pipeline stage and a top-level
//! error that names the stage that failed.

use crate::types::RuleId;
use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// fixerset.toml could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// fixerset.toml is not valid TOML or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// fixerset.toml parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule translation errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A preset lists a rule the metadata catalog does not know
    #[error("Unknown rule '{0}': no metadata returned by the preset source")]
    UnknownRule(RuleId),

    /// The configured preset is absent from the preset listing
    #[error("Preset '{0}' not found in the preset source")]
    PresetNotFound(String),

    /// The embedded rule catalog is malformed
    #[error("Invalid rule catalog: {0}")]
    InvalidCatalog(String),
}

/// Errors raised by preset sources
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Snapshot could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload does not have the expected shape
    #[error("Malformed {what}: {message}")]
    Malformed { what: String, message: String },
}

/// Errors raised while patching the target file
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The marker assignment does not occur in the target file
    #[error("Marker '{marker}' not found in {path}")]
    MarkerNotFound { marker: String, path: PathBuf },

    /// The marker was found but its value expression never terminates
    #[error("Value of '{marker}' in {path} has no terminating ';'")]
    UnterminatedBlock { marker: String, path: PathBuf },

    /// The target file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for fixerset
#[derive(Debug, thiserror::Error)]
pub enum FixersetError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Translation error
    #[error("Translation error: {0}")]
    Rule(#[from] RuleError),

    /// Preset source error
    #[error("Preset source error: {0}")]
    Source(#[from] SourceError),

    /// Target file error
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
