#![forbid(unsafe_code)]

//! fixerset: translate a StyleCI preset into PHP-CS-Fixer rule sets
//!
//! A preset is fetched from a StyleCI-compatible source, each of its fixers
//! is mapped onto PHP-CS-Fixer rules through an embedded catalog, and the
//! result is split into a standard and a risky group. The groups are
//! rendered as a PHP array literal and spliced into an existing file in
//! place of a marked constant.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod source;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, FixersetError, RuleError, SourceError, WriteError};

// Re-export core domain types for convenient access
pub use engine::{GroupLabels, OutputDocument, Translator};
pub use rules::RuleCatalog;
pub use types::{PresetDefinition, RuleId, RuleMetadata};
