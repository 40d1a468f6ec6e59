#![forbid(unsafe_code)]

//! In-place replacement of a generated block inside an existing file
//!
//! The block is the value expression of a PHP constant assignment such as
//! `const RULE_DEFINITIONS = [...];`. Only the bytes between the `=` (and
//! the whitespace after it) and the terminating `;` are replaced; every other
//! byte of the file is preserved. Nothing is written unless the marker is
//! found and its value terminates.

use crate::error::{ConfigError, WriteError};
use regex::Regex;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Locates the assignment whose value is regenerated
#[derive(Debug, Clone)]
pub struct Marker {
    constant: String,
    pattern: Regex,
}

impl Marker {
    /// Marker for `const NAME = ` (an optional PHP type may precede NAME)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `name` is not a PHP identifier.
    pub fn constant(name: &str) -> Result<Self, ConfigError> {
        if !is_identifier(name) {
            return Err(ConfigError::Validation(format!(
                "Invalid constant name '{}'",
                name
            )));
        }

        let pattern = Regex::new(&format!(
            r"\bconst\s+(?:\??[A-Za-z_\\][A-Za-z0-9_\\|]*\s+)?{}\s*=\s*",
            regex::escape(name)
        ))
        .map_err(|e| ConfigError::Validation(format!("Invalid marker pattern: {}", e)))?;

        Ok(Self {
            constant: name.to_string(),
            pattern,
        })
    }

    /// The constant name this marker looks for
    pub fn name(&self) -> &str {
        &self.constant
    }
}

/// Whether `name` is a valid PHP constant identifier
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Why a block could not be located in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    MarkerNotFound,
    Unterminated,
}

/// Byte range of the marker's value expression, excluding the `;`
pub fn locate_value(content: &str, marker: &Marker) -> Result<Range<usize>, BlockError> {
    let bytes = content.as_bytes();
    let found = marker
        .pattern
        .find_iter(content)
        .find(|m| is_code_at(bytes, m.start()))
        .ok_or(BlockError::MarkerNotFound)?;
    let end = find_terminator(content.as_bytes(), found.end()).ok_or(BlockError::Unterminated)?;
    Ok(found.end()..end)
}

/// Replace the marker's value expression in `content` with `new_text`
///
/// Continuation lines of `new_text` are aligned with the line holding the
/// marker.
pub fn splice_marked_block(
    content: &str,
    marker: &Marker,
    new_text: &str,
) -> Result<String, BlockError> {
    let range = locate_value(content, marker)?;
    let new_text = indent_continuation(new_text, line_indent(content, range.start));
    let mut out = String::with_capacity(content.len() - range.len() + new_text.len());
    out.push_str(&content[..range.start]);
    out.push_str(&new_text);
    out.push_str(&content[range.end..]);
    Ok(out)
}

/// Leading whitespace of the line containing `pos`
fn line_indent(content: &str, pos: usize) -> &str {
    let start = content[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &content[start..pos];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

/// Prefix every line but the first with `unit`
///
/// Empty lines stay empty so no trailing whitespace is introduced.
pub fn indent_continuation(text: &str, unit: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(unit);
            }
        }
        out.push_str(line);
    }
    out
}

/// Result of writing a patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file was rewritten
    Updated,
    /// The generated block already matched; the file was not touched
    Unchanged,
}

/// A computed but not yet written patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPatch {
    pub path: PathBuf,
    pub original: String,
    pub updated: String,
}

impl PlannedPatch {
    /// Whether writing would change the file
    pub fn is_changed(&self) -> bool {
        self.original != self.updated
    }

    /// Write the patch if it changes the file
    pub fn apply(&self) -> Result<PatchOutcome, WriteError> {
        if !self.is_changed() {
            tracing::info!(path = %self.path.display(), "generated block is up to date");
            return Ok(PatchOutcome::Unchanged);
        }

        fs::write(&self.path, &self.updated).map_err(|source| WriteError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "rewrote generated block");
        Ok(PatchOutcome::Updated)
    }
}

/// Compute the patched contents of `path` without writing
///
/// # Errors
///
/// - `WriteError::Io` if the file cannot be read
/// - `WriteError::MarkerNotFound` if the marker does not occur
/// - `WriteError::UnterminatedBlock` if the value has no terminating `;`
pub fn plan_patch(path: &Path, marker: &Marker, new_text: &str) -> Result<PlannedPatch, WriteError> {
    let original = fs::read_to_string(path).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = splice_marked_block(&original, marker, new_text).map_err(|e| match e {
        BlockError::MarkerNotFound => WriteError::MarkerNotFound {
            marker: marker.name().to_string(),
            path: path.to_path_buf(),
        },
        BlockError::Unterminated => WriteError::UnterminatedBlock {
            marker: marker.name().to_string(),
            path: path.to_path_buf(),
        },
    })?;

    Ok(PlannedPatch {
        path: path.to_path_buf(),
        original,
        updated,
    })
}

/// Replace the marker's value in `path` with `new_text`
///
/// On any error the file is left untouched.
pub fn replace_marked_block(
    path: &Path,
    marker: &Marker,
    new_text: &str,
) -> Result<PatchOutcome, WriteError> {
    plan_patch(path, marker, new_text)?.apply()
}

/// Index of the first `;` at bracket depth zero, outside strings and comments
fn find_terminator(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut i = start;

    while i < bytes.len() {
        if let Some(next) = skip_inert(bytes, i) {
            i = next?;
            continue;
        }
        match bytes[i] {
            b'[' | b'(' | b'{' => depth += 1,
            b']' | b')' | b'}' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => return Some(i),
            _ => {}
        }
        i += 1;
    }

    None
}

/// Whether `pos` is code rather than part of a string literal or comment
fn is_code_at(bytes: &[u8], pos: usize) -> bool {
    let mut i = 0;
    while i < pos {
        i = match skip_inert(bytes, i) {
            Some(Some(next)) => next,
            Some(None) => return false,
            None => i + 1,
        };
    }
    i == pos
}

/// End of the string literal or comment opening at `i`
///
/// `None` if nothing opens at `i`, `Some(None)` if it never closes.
fn skip_inert(bytes: &[u8], i: usize) -> Option<Option<usize>> {
    match bytes[i] {
        quote @ (b'\'' | b'"') => Some(skip_string(bytes, i, quote)),
        b'/' if bytes.get(i + 1) == Some(&b'/') => Some(Some(skip_line(bytes, i))),
        b'#' => Some(Some(skip_line(bytes, i))),
        b'/' if bytes.get(i + 1) == Some(&b'*') => Some(skip_block_comment(bytes, i + 2)),
        _ => None,
    }
}

/// Position just past the closing quote of the string opening at `start`
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Position of the newline ending the line that contains `start`
fn skip_line(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| start + offset)
}

/// Position just past the `*/` closing a block comment
fn skip_block_comment(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|offset| start + offset + 2)
}
