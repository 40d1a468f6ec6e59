#![forbid(unsafe_code)]

//! Group composition: assemble the standard and risky rule sets
//!
//! The standard group always opens with the base preset. The upstream preset
//! never lists it, but PHP-CS-Fixer rule sets are expected to extend it.

use crate::engine::merger::MergedConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Labels used for the two output groups and the injected base preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLabels {
    /// Label of the non-risky group
    pub standard: String,
    /// Label of the risky group
    pub risky: String,
    /// Rule set enabled first in the standard group
    pub base_preset: String,
}

impl Default for GroupLabels {
    fn default() -> Self {
        Self {
            standard: "@Laravel".to_string(),
            risky: "@Laravel:risky".to_string(),
            base_preset: "@PSR2".to_string(),
        }
    }
}

/// One labelled group of target rules
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub label: String,
    pub rules: MergedConfig,
}

/// The translated document: exactly two groups, standard then risky
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub standard: RuleSet,
    pub risky: RuleSet,
}

impl OutputDocument {
    /// Groups in output order
    pub fn groups(&self) -> [&RuleSet; 2] {
        [&self.standard, &self.risky]
    }

    /// The document as a single ordered mapping of label to rules
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        for group in self.groups() {
            map.insert(group.label.clone(), group.rules.clone().into_value());
        }
        Value::Object(map)
    }
}

/// Compose the output document from the two merged groups
pub fn compose(
    not_risky: MergedConfig,
    risky: MergedConfig,
    labels: &GroupLabels,
) -> OutputDocument {
    OutputDocument {
        standard: RuleSet {
            label: labels.standard.clone(),
            rules: not_risky.with_leading(&labels.base_preset, Value::Bool(true)),
        },
        risky: RuleSet {
            label: labels.risky.clone(),
            rules: risky,
        },
    }
}
