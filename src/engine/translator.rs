#![forbid(unsafe_code)]

//! Translation pipeline: resolver, merger, composer
//!
//! The translator is stateless across runs. Each call fetches fresh data
//! from the preset source and rebuilds the whole document; any error aborts
//! before a document exists.

use crate::engine::composer::{GroupLabels, OutputDocument, compose};
use crate::engine::merger::merge_group;
use crate::engine::resolver::{MetadataLookup, resolve};
use crate::error::{FixersetError, RuleError};
use crate::rules::RuleCatalog;
use crate::source::PresetSource;
use crate::types::RuleId;

/// Translates a source preset into an [`OutputDocument`]
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: RuleCatalog,
    labels: GroupLabels,
}

impl Translator {
    /// Create a translator over a catalog and output labels
    pub fn new(catalog: RuleCatalog, labels: GroupLabels) -> Self {
        Self { catalog, labels }
    }

    /// The catalog in use
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// The output labels in use
    pub fn labels(&self) -> &GroupLabels {
        &self.labels
    }

    /// Fetch `preset` from `source` and translate it
    ///
    /// # Errors
    ///
    /// - `SourceError` from the source, unmodified
    /// - `RuleError::PresetNotFound` if the source has no preset named `preset`
    /// - `RuleError::UnknownRule` if a preset rule has no metadata
    pub fn translate(
        &self,
        source: &dyn PresetSource,
        preset: &str,
    ) -> Result<OutputDocument, FixersetError> {
        let rule_ids = source
            .list_preset_rule_ids(preset)?
            .ok_or_else(|| RuleError::PresetNotFound(preset.to_string()))?;
        let metadata = source.list_rule_metadata()?;
        tracing::info!(
            preset,
            rules = rule_ids.len(),
            known = metadata.len(),
            "fetched preset"
        );

        Ok(self.translate_rules(&rule_ids, &metadata)?)
    }

    /// Translate an already fetched rule list
    ///
    /// # Errors
    ///
    /// Returns `RuleError::UnknownRule` if a rule has no metadata.
    pub fn translate_rules(
        &self,
        rule_ids: &[RuleId],
        metadata: &impl MetadataLookup,
    ) -> Result<OutputDocument, RuleError> {
        let resolved = resolve(rule_ids, metadata, &self.catalog)?;
        let excluded = rule_ids.len() - resolved.len();
        if excluded > 0 {
            tracing::warn!(excluded, "dropped unstable rules from preset");
        }

        let not_risky = merge_group(&resolved.not_risky, &self.catalog);
        let risky = merge_group(&resolved.risky, &self.catalog);

        Ok(compose(not_risky, risky, &self.labels))
    }
}
