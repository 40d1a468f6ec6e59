//! Initialize a fixerset project
//!
//! Writes a commented default fixerset.toml.

use std::fs;
use std::path::Path;

/// Default content for fixerset.toml
pub(crate) const DEFAULT_FIXERSET_TOML: &str = r#"[fixerset]
version = "1"

# Name of the preset to translate
preset = "laravel"

[source]
# Snapshots of the StyleCI /presets and /fixers listings
presets = "styleci/presets.json"
fixers = "styleci/fixers.json"

[target]
# File holding the generated constant (relative to this file)
path = "src/Config.php"
constant = "RULE_DEFINITIONS"
indent = "    "

[groups]
standard = "@Laravel"
risky = "@Laravel:risky"
base_preset = "@PSR2"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// What the init command did with the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitResult {
    /// The file did not exist and was written
    Created,
    /// The file existed and was left alone
    Skipped,
    /// The file existed and was replaced
    Overwritten,
}

/// Run the init command
///
/// # Arguments
/// * `path` - Where to write fixerset.toml
/// * `force` - If true, overwrite an existing file. If false, skip it.
///
/// # Returns
/// * `Ok(InitResult)` - Whether the file was created, skipped, or overwritten
/// * `Err(InitError)` - If an I/O error occurred
pub fn run_init(path: &Path, force: bool) -> Result<InitResult, InitError> {
    if path.is_dir() {
        return Err(InitError::Path(format!(
            "'{}' is a directory",
            path.display()
        )));
    }

    if path.exists() {
        if !force {
            return Ok(InitResult::Skipped);
        }
        fs::write(path, DEFAULT_FIXERSET_TOML)?;
        return Ok(InitResult::Overwritten);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_FIXERSET_TOML)?;
    Ok(InitResult::Created)
}
