#![forbid(unsafe_code)]

//! Rule catalog: StyleCI fixer to PHP-CS-Fixer rule translations
//!
//! The catalog is embedded at compile time with `include_str!` so the binary
//! is self-contained. It holds two things:
//! - explicit translations for fixers whose PHP-CS-Fixer rule has a different
//!   name or needs options
//! - the set of unstable fixers that must never be emitted

use crate::error::RuleError;
use crate::rules::value::{OptionMap, deep_realize};
use crate::types::RuleId;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Embedded built-in catalog
const BUILTIN_CATALOG: &str = include_str!("../../builtin/catalog.toml");

/// Translation of one source rule
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    /// Enable the rule of the same name with default options
    Enabled,
    /// One or more target rules with their options
    Mapped(OptionMap),
}

impl CatalogEntry {
    /// The target rules this entry contributes for `rule_id`
    pub fn targets(&self, rule_id: &RuleId) -> OptionMap {
        match self {
            CatalogEntry::Enabled => {
                let mut map = OptionMap::new();
                map.insert(rule_id.as_str().to_string(), Value::Bool(true));
                map
            }
            CatalogEntry::Mapped(map) => map.clone(),
        }
    }
}

/// On-disk shape of catalog.toml
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    unstable: UnstableSection,

    #[serde(default)]
    fixers: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
struct UnstableSection {
    #[serde(default)]
    fixers: Vec<RuleId>,
}

/// Static translation table plus the unstable-exclusion set
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    entries: HashMap<RuleId, CatalogEntry>,
    unstable: HashSet<RuleId>,
}

impl RuleCatalog {
    /// Create an empty catalog (every rule maps to itself)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidCatalog` if the embedded document is malformed.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from its TOML form
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidCatalog` if:
    /// - The document is not valid TOML
    /// - A fixer name is not a valid rule ID
    /// - An entry is neither `true` nor a non-empty table
    pub fn from_toml(s: &str) -> Result<Self, RuleError> {
        let file: CatalogFile =
            toml::from_str(s).map_err(|e| RuleError::InvalidCatalog(e.to_string()))?;

        let mut catalog = Self::new();
        for id in file.unstable.fixers {
            catalog.mark_unstable(id);
        }

        for (name, value) in file.fixers {
            let rule_id = RuleId::new(name.clone()).ok_or_else(|| {
                RuleError::InvalidCatalog(format!("Invalid fixer name '{}'", name))
            })?;

            let entry = match value {
                toml::Value::Boolean(true) => CatalogEntry::Enabled,
                toml::Value::Table(table) if !table.is_empty() => CatalogEntry::Mapped(
                    table
                        .into_iter()
                        .map(|(target, options)| (target, deep_realize(options)))
                        .collect(),
                ),
                other => {
                    return Err(RuleError::InvalidCatalog(format!(
                        "Entry for '{}' must be `true` or a non-empty table, got {}",
                        name,
                        other.type_str()
                    )));
                }
            };

            catalog.insert(rule_id, entry);
        }

        Ok(catalog)
    }

    /// Add or replace the translation for a rule
    pub fn insert(&mut self, rule_id: RuleId, entry: CatalogEntry) {
        self.entries.insert(rule_id, entry);
    }

    /// Add a rule to the unstable-exclusion set
    pub fn mark_unstable(&mut self, rule_id: RuleId) {
        self.unstable.insert(rule_id);
    }

    /// Whether a rule is excluded as unstable
    pub fn is_unstable(&self, rule_id: &RuleId) -> bool {
        self.unstable.contains(rule_id)
    }

    /// The explicit entry for a rule, if the catalog has one
    pub fn entry(&self, rule_id: &RuleId) -> Option<&CatalogEntry> {
        self.entries.get(rule_id)
    }

    /// The target rules for a source rule, defaulting to `{rule_id: true}`
    pub fn targets_for(&self, rule_id: &RuleId) -> OptionMap {
        self.entry(rule_id)
            .unwrap_or(&CatalogEntry::Enabled)
            .targets(rule_id)
    }

    /// Number of explicit entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no explicit entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
