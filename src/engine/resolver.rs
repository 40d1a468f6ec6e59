#![forbid(unsafe_code)]

//! Preset resolution: drop unstable rules and split by risk
//!
//! The partition is stable: each output group keeps the relative order the
//! rules had in the preset listing.

use crate::error::RuleError;
use crate::rules::RuleCatalog;
use crate::types::{RuleId, RuleMetadata};
use std::collections::HashMap;

/// Lookup of per-rule metadata by rule ID
pub trait MetadataLookup {
    /// Returns the metadata for `rule_id`, or `None` if the source does not know it
    fn lookup(&self, rule_id: &RuleId) -> Option<&RuleMetadata>;
}

impl MetadataLookup for HashMap<RuleId, RuleMetadata> {
    fn lookup(&self, rule_id: &RuleId) -> Option<&RuleMetadata> {
        self.get(rule_id)
    }
}

/// A preset's rules split into the two output groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPreset {
    /// Rules whose fixes only change formatting
    pub not_risky: Vec<RuleId>,
    /// Rules whose fixes may change behavior
    pub risky: Vec<RuleId>,
}

impl ResolvedPreset {
    /// Total number of rules across both groups
    pub fn len(&self) -> usize {
        self.not_risky.len() + self.risky.len()
    }

    /// Whether both groups are empty
    pub fn is_empty(&self) -> bool {
        self.not_risky.is_empty() && self.risky.is_empty()
    }
}

/// Resolve a preset's rule list into risky and non-risky groups
///
/// # Errors
///
/// Returns `RuleError::UnknownRule` for the first non-excluded rule that has
/// no metadata.
pub fn resolve(
    rule_ids: &[RuleId],
    metadata: &impl MetadataLookup,
    catalog: &RuleCatalog,
) -> Result<ResolvedPreset, RuleError> {
    let mut resolved = ResolvedPreset::default();

    for rule_id in rule_ids {
        if catalog.is_unstable(rule_id) {
            tracing::debug!(rule = %rule_id, "skipping unstable rule");
            continue;
        }

        let meta = metadata
            .lookup(rule_id)
            .ok_or_else(|| RuleError::UnknownRule(rule_id.clone()))?;

        if meta.risky {
            resolved.risky.push(rule_id.clone());
        } else {
            resolved.not_risky.push(rule_id.clone());
        }
    }

    Ok(resolved)
}
