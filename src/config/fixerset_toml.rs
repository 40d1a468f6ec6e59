//! Parsing and validation for fixerset.toml configuration files

use crate::engine::GroupLabels;
use crate::error::ConfigError;
use crate::output::patch::is_identifier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct for fixerset.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// fixerset metadata
    pub fixerset: FixersetMeta,

    /// Snapshots holding presets and rule metadata
    #[serde(default)]
    pub source: SourceConfig,

    /// The file that receives the generated block
    #[serde(default)]
    pub target: TargetConfig,

    /// Output group labels
    #[serde(default)]
    pub groups: GroupsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Relative paths in the file resolve against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rebase relative paths onto `base`
    pub fn resolve_relative_to(&mut self, base: &Path) {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        rebase(&mut self.target.path);
        rebase(&mut self.source.presets);
        rebase(&mut self.source.fixers);
    }

    /// Output group labels for the translator
    pub fn labels(&self) -> GroupLabels {
        GroupLabels {
            standard: self.groups.standard.clone(),
            risky: self.groups.risky.clone(),
            base_preset: self.groups.base_preset.clone(),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        // Validate version
        if self.fixerset.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.fixerset.version
            )));
        }

        if self.fixerset.preset.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fixerset.preset must not be empty".to_string(),
            ));
        }

        for (field, path) in [
            ("source.presets", &self.source.presets),
            ("source.fixers", &self.source.fixers),
            ("target.path", &self.target.path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        if !is_identifier(&self.target.constant) {
            return Err(ConfigError::Validation(format!(
                "target.constant '{}' is not a valid PHP constant name",
                self.target.constant
            )));
        }

        if self.target.indent.is_empty()
            || !self.target.indent.chars().all(|c| c == ' ' || c == '\t')
        {
            return Err(ConfigError::Validation(
                "target.indent must be one or more spaces or tabs".to_string(),
            ));
        }

        for (field, value) in [
            ("groups.standard", &self.groups.standard),
            ("groups.risky", &self.groups.risky),
            ("groups.base_preset", &self.groups.base_preset),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        if self.groups.standard == self.groups.risky {
            return Err(ConfigError::Validation(format!(
                "groups.standard and groups.risky must differ (both are '{}')",
                self.groups.standard
            )));
        }

        Ok(())
    }
}

/// fixerset metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixersetMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Name of the preset to translate
    #[serde(default = "default_preset")]
    pub preset: String,
}

impl Default for FixersetMeta {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            preset: default_preset(),
        }
    }
}

fn default_preset() -> String {
    "laravel".to_string()
}

/// Preset source section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Snapshot of the preset listing
    #[serde(default = "default_presets_path")]
    pub presets: PathBuf,

    /// Snapshot of the fixer metadata listing
    #[serde(default = "default_fixers_path")]
    pub fixers: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            presets: default_presets_path(),
            fixers: default_fixers_path(),
        }
    }
}

fn default_presets_path() -> PathBuf {
    PathBuf::from("styleci/presets.json")
}

fn default_fixers_path() -> PathBuf {
    PathBuf::from("styleci/fixers.json")
}

/// Target file section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// File holding the generated constant
    #[serde(default = "default_target_path")]
    pub path: PathBuf,

    /// Name of the constant whose value is regenerated
    #[serde(default = "default_constant")]
    pub constant: String,

    /// One indentation unit of the target file
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            path: default_target_path(),
            constant: default_constant(),
            indent: default_indent(),
        }
    }
}

fn default_target_path() -> PathBuf {
    PathBuf::from("src/Config.php")
}

fn default_constant() -> String {
    "RULE_DEFINITIONS".to_string()
}

fn default_indent() -> String {
    "    ".to_string()
}

/// Output group labels section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupsConfig {
    #[serde(default = "default_standard_label")]
    pub standard: String,

    #[serde(default = "default_risky_label")]
    pub risky: String,

    #[serde(default = "default_base_preset")]
    pub base_preset: String,
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            standard: default_standard_label(),
            risky: default_risky_label(),
            base_preset: default_base_preset(),
        }
    }
}

fn default_standard_label() -> String {
    GroupLabels::default().standard
}

fn default_risky_label() -> String {
    GroupLabels::default().risky
}

fn default_base_preset() -> String {
    GroupLabels::default().base_preset
}
