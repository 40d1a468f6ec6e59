#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable listings
//!
//! Outputs one JSON object per line in document order:
//! 1. One rule record per target rule, group by group
//! 2. One group record per group

use crate::engine::OutputDocument;
use serde::Serialize;
use serde_json::Value;

/// JSONL output formatter
///
/// Formats a translated document as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the document as JSONL
    pub fn format(&self, doc: &OutputDocument) -> String {
        let mut output = String::new();

        for group in doc.groups() {
            for (name, options) in group.rules.iter() {
                let record = RuleRecord {
                    record_type: "rule",
                    group: &group.label,
                    rule: name,
                    options,
                };
                if let Ok(json) = serde_json::to_string(&record) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }

        for group in doc.groups() {
            let record = GroupRecord {
                record_type: "group",
                group: &group.label,
                rules: group.rules.len() as u64,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, doc: &OutputDocument) {
        print!("{}", self.format(doc));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule record for JSONL output
#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    group: &'a str,
    rule: &'a str,
    options: &'a Value,
}

/// Group summary record for JSONL output
#[derive(Debug, Serialize)]
struct GroupRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    group: &'a str,
    rules: u64,
}
