#![forbid(unsafe_code)]

//! Preset source backed by local JSON snapshots
//!
//! The files hold the payloads the StyleCI API serves for `/presets` and
//! `/fixers`, either as a bare array or wrapped under `data`.

use crate::error::SourceError;
use crate::source::{PresetSource, parse_listing};
use crate::types::{PresetDefinition, RuleMetadata};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads presets and fixer metadata from two JSON files
#[derive(Debug, Clone)]
pub struct FileSource {
    presets: PathBuf,
    fixers: PathBuf,
}

impl FileSource {
    /// Create a source from a presets file and a fixers file
    pub fn new(presets: impl Into<PathBuf>, fixers: impl Into<PathBuf>) -> Self {
        Self {
            presets: presets.into(),
            fixers: fixers.into(),
        }
    }

    fn read(path: &Path) -> Result<String, SourceError> {
        tracing::debug!(path = %path.display(), "reading snapshot");
        fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl PresetSource for FileSource {
    fn fetch_presets(&self) -> Result<Vec<PresetDefinition>, SourceError> {
        let body = Self::read(&self.presets)?;
        parse_listing(&body, &format!("preset listing {}", self.presets.display()))
    }

    fn fetch_rule_metadata(&self) -> Result<Vec<RuleMetadata>, SourceError> {
        let body = Self::read(&self.fixers)?;
        parse_listing(&body, &format!("fixer listing {}", self.fixers.display()))
    }
}
