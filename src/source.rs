#![forbid(unsafe_code)]

//! Preset sources: where preset listings and rule metadata come from
//!
//! The engine only sees the `PresetSource` trait. `FileSource` reads the
//! StyleCI listing payloads (`/presets` and `/fixers`) from local snapshots.

pub mod file;

pub use file::FileSource;

use crate::error::SourceError;
use crate::types::{PresetDefinition, RuleId, RuleMetadata};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Read access to the remote source of truth
///
/// Implementations perform no retries; errors surface unchanged to the caller.
pub trait PresetSource {
    /// Fetch every preset the source publishes
    fn fetch_presets(&self) -> Result<Vec<PresetDefinition>, SourceError>;

    /// Fetch metadata for every rule the source knows
    fn fetch_rule_metadata(&self) -> Result<Vec<RuleMetadata>, SourceError>;

    /// Rule IDs of the preset named `preset`, or `None` if there is no such preset
    fn list_preset_rule_ids(&self, preset: &str) -> Result<Option<Vec<RuleId>>, SourceError> {
        Ok(self
            .fetch_presets()?
            .into_iter()
            .find(|p| p.name == preset)
            .map(|p| p.rules))
    }

    /// Rule metadata keyed by rule ID
    fn list_rule_metadata(&self) -> Result<HashMap<RuleId, RuleMetadata>, SourceError> {
        Ok(self
            .fetch_rule_metadata()?
            .into_iter()
            .map(|meta| (meta.name.clone(), meta))
            .collect())
    }
}

/// A listing is either a bare array or an object wrapping it under `data`
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

/// Parse a JSON listing payload
pub(crate) fn parse_listing<T: DeserializeOwned>(
    body: &str,
    what: &str,
) -> Result<Vec<T>, SourceError> {
    let listing: Listing<T> = serde_json::from_str(body).map_err(|e| SourceError::Malformed {
        what: what.to_string(),
        message: e.to_string(),
    })?;

    Ok(match listing {
        Listing::Bare(items) | Listing::Wrapped { data: items } => items,
    })
}
