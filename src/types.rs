#![forbid(unsafe_code)]

//! Core domain types for fixerset
//!
//! This module defines the identifiers and metadata shared by the catalog,
//! the preset sources, and the translation engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated source rule identifier (a StyleCI fixer name)
///
/// Rule IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleId(id))
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleId::new(value.clone()).ok_or_else(|| format!("Invalid rule ID '{}'", value))
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}

/// Per-rule attributes published by the preset source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// Source rule identifier
    pub name: RuleId,

    /// Whether the rule's fix may change program behavior
    #[serde(default)]
    pub risky: bool,
}

/// A named preset: an unordered-by-meaning but order-preserved rule list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDefinition {
    /// Preset name, e.g. "laravel"
    pub name: String,

    /// Rules enabled by this preset, in source order
    #[serde(default, alias = "fixers")]
    pub rules: Vec<RuleId>,
}
