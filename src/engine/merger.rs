#![forbid(unsafe_code)]

//! Rule merging: fold a rule group through the catalog
//!
//! Several source rules may configure the same target rule (for example two
//! fixers that each set the spacing of a different operator under
//! `binary_operator_spaces`). Entries are merged recursively so both survive.

use crate::rules::{OptionMap, RuleCatalog, merge_map};
use crate::types::RuleId;
use serde::Serialize;
use serde_json::Value;

/// Target rule name to resolved options, in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedConfig(OptionMap);

impl MergedConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Recursively merge a catalog entry into this config
    pub fn merge_entry(&mut self, entry: OptionMap) {
        merge_map(&mut self.0, entry);
    }

    /// Return a copy of this config with `name` as its first key
    ///
    /// An existing entry for `name` is dropped in favor of `value`.
    pub fn with_leading(self, name: &str, value: Value) -> Self {
        let mut map = OptionMap::new();
        map.insert(name.to_string(), value);
        for (key, existing) in self.0 {
            if key != name {
                map.insert(key, existing);
            }
        }
        MergedConfig(map)
    }

    /// Options for a target rule
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether a target rule is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Target rule names in output order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in output order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of target rules
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no target rules
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a plain option value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<OptionMap> for MergedConfig {
    fn from(map: OptionMap) -> Self {
        MergedConfig(map)
    }
}

/// Merge a rule group into a single config, in group order
pub fn merge_group(group: &[RuleId], catalog: &RuleCatalog) -> MergedConfig {
    let mut merged = MergedConfig::new();
    for rule_id in group {
        merged.merge_entry(catalog.targets_for(rule_id));
    }
    tracing::debug!(
        source_rules = group.len(),
        target_rules = merged.len(),
        "merged rule group"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CatalogEntry;
    use serde_json::json;

    fn id(s: &str) -> RuleId {
        RuleId::new(s).unwrap()
    }

    fn mapped(value: Value) -> CatalogEntry {
        match value {
            Value::Object(map) => CatalogEntry::Mapped(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_unmapped_rule_merges_to_true() {
        let merged = merge_group(&[id("foo")], &RuleCatalog::new());
        assert_eq!(merged.into_value(), json!({"foo": true}));
    }

    #[test]
    fn test_builtin_short_array_and_post_increment() {
        let catalog = RuleCatalog::builtin().unwrap();
        let merged = merge_group(&[id("short_array_syntax"), id("post_increment")], &catalog);

        assert_eq!(
            merged.clone().into_value(),
            json!({
                "array_syntax": {"syntax": "short"},
                "increment_style": {"style": "post"}
            })
        );
        assert_eq!(
            merged.names().collect::<Vec<_>>(),
            vec!["array_syntax", "increment_style"]
        );
    }

    #[test]
    fn test_operator_keys_merge_under_one_rule() {
        let catalog = RuleCatalog::builtin().unwrap();
        let merged = merge_group(
            &[id("unalign_double_arrow"), id("unalign_equals")],
            &catalog,
        );

        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged.get("binary_operator_spaces"),
            Some(&json!({"operators": {"=>": "single_space", "=": "single_space"}}))
        );
    }

    #[test]
    fn test_later_rule_wins_leaf_conflict() {
        let mut catalog = RuleCatalog::new();
        catalog.insert(id("first"), mapped(json!({"target": {"style": "pre"}})));
        catalog.insert(id("second"), mapped(json!({"target": {"style": "post"}})));

        let merged = merge_group(&[id("first"), id("second")], &catalog);
        assert_eq!(merged.get("target"), Some(&json!({"style": "post"})));

        let reversed = merge_group(&[id("second"), id("first")], &catalog);
        assert_eq!(reversed.get("target"), Some(&json!({"style": "pre"})));
    }

    #[test]
    fn test_entry_with_several_targets() {
        let mut catalog = RuleCatalog::new();
        catalog.insert(id("combo"), mapped(json!({"one": true, "two": {"x": 1}})));

        let merged = merge_group(&[id("combo")], &catalog);
        assert!(merged.contains("one"));
        assert!(merged.contains("two"));
    }

    #[test]
    fn test_empty_group() {
        let merged = merge_group(&[], &RuleCatalog::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_with_leading_moves_existing_key_first() {
        let mut config = MergedConfig::new();
        config.merge_entry(match json!({"a": true, "@PSR2": false}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        });

        let config = config.with_leading("@PSR2", Value::Bool(true));
        assert_eq!(config.names().collect::<Vec<_>>(), vec!["@PSR2", "a"]);
        assert_eq!(config.get("@PSR2"), Some(&json!(true)));
    }
}
