//! Integration tests for the translation pipeline
//!
//! These tests drive the resolver, merger, and composer through the public
//! API using the StyleCI snapshots under tests/fixtures/styleci.

mod common;

use common::fixture_path;
use fixerset::engine::{GroupLabels, Translator, merge_group, resolve};
use fixerset::error::{FixersetError, RuleError};
use fixerset::output::render_literal;
use fixerset::rules::RuleCatalog;
use fixerset::source::{FileSource, PresetSource};
use fixerset::types::{RuleId, RuleMetadata};
use serde_json::json;
use std::collections::HashMap;

fn snapshot_source() -> FileSource {
    FileSource::new(
        fixture_path("styleci/presets.json"),
        fixture_path("styleci/fixers.json"),
    )
}

fn translator() -> Translator {
    Translator::new(
        assert_ok!(RuleCatalog::builtin()),
        GroupLabels::default(),
    )
}

fn ids(names: &[&str]) -> Vec<RuleId> {
    names
        .iter()
        .map(|n| assert_some!(RuleId::new(*n)))
        .collect()
}

fn metadata(entries: &[(&str, bool)]) -> HashMap<RuleId, RuleMetadata> {
    entries
        .iter()
        .map(|(name, risky)| {
            let id = assert_some!(RuleId::new(*name));
            (
                id.clone(),
                RuleMetadata {
                    name: id,
                    risky: *risky,
                },
            )
        })
        .collect()
}

#[test]
fn test_laravel_snapshot_translation() {
    let doc = assert_ok!(translator().translate(&snapshot_source(), "laravel"));

    assert_eq!(
        doc.to_value(),
        json!({
            "@Laravel": {
                "@PSR2": true,
                "ordered_imports": {"sort_algorithm": "alpha"},
                "binary_operator_spaces": {
                    "default": "single_space",
                    "operators": {"=>": "single_space", "=": "single_space"}
                },
                "blank_line_before_statement": {"statements": ["return"]},
                "constant_case": {"case": "lower"},
                "no_unused_imports": true,
                "phpdoc_no_alias_tag": {"replacements": {"link": "see", "type": "var"}},
                "increment_style": {"style": "post"},
                "array_syntax": {"syntax": "short"},
                "single_quote": true
            },
            "@Laravel:risky": {
                "no_alias_functions": true,
                "psr_autoloading": true,
                "self_accessor": true
            }
        })
    );
}

#[test]
fn test_standard_group_opens_with_base_preset() {
    let doc = assert_ok!(translator().translate(&snapshot_source(), "psr2"));

    let names: Vec<&str> = doc.standard.rules.names().collect();
    assert_eq!(names, vec!["@PSR2", "constant_case", "line_ending"]);
    assert!(doc.risky.rules.is_empty());
}

#[test]
fn test_partition_is_disjoint_and_drops_only_unstable() -> common::TestResult {
    let source = snapshot_source();
    let preset = assert_some!(source.list_preset_rule_ids("laravel")?);
    let meta = source.list_rule_metadata()?;
    let catalog = RuleCatalog::builtin()?;

    let resolved = resolve(&preset, &meta, &catalog)?;

    for id in &resolved.not_risky {
        assert!(!resolved.risky.contains(id), "{} in both groups", id);
    }

    let mut union: Vec<RuleId> = resolved
        .not_risky
        .iter()
        .chain(resolved.risky.iter())
        .cloned()
        .collect();
    union.sort();

    let mut expected: Vec<RuleId> = preset
        .iter()
        .filter(|id| !catalog.is_unstable(id))
        .cloned()
        .collect();
    expected.sort();

    assert_eq!(union, expected);
    assert_eq!(expected.len(), preset.len() - 2);
    Ok(())
}

#[test]
fn test_unstable_rules_never_reach_output() {
    let doc = assert_ok!(translator().translate(&snapshot_source(), "laravel"));
    let rendered = render_literal(&doc, "    ");

    for unstable in ["laravel_braces", "no_unused_lambda_imports"] {
        assert!(!rendered.contains(unstable), "{} leaked", unstable);
    }
}

#[test]
fn test_unstable_rule_with_mapping_contributes_nothing() -> common::TestResult {
    let mut catalog = RuleCatalog::builtin()?;
    let id = assert_some!(RuleId::new("short_array_syntax"));
    catalog.mark_unstable(id);

    let translator = Translator::new(catalog, GroupLabels::default());
    let doc = translator.translate_rules(
        &ids(&["short_array_syntax", "single_quote"]),
        &metadata(&[("short_array_syntax", false), ("single_quote", false)]),
    )?;

    assert!(!doc.standard.rules.contains("array_syntax"));
    assert!(!doc.standard.rules.contains("short_array_syntax"));
    assert!(doc.standard.rules.contains("single_quote"));
    Ok(())
}

#[test]
fn test_non_risky_inputs_merge_into_standard_group() -> common::TestResult {
    let catalog = RuleCatalog::builtin()?;
    let preset = ids(&["short_array_syntax", "post_increment"]);
    let meta = metadata(&[("short_array_syntax", false), ("post_increment", false)]);

    let resolved = resolve(&preset, &meta, &catalog)?;
    assert_eq!(resolved.not_risky, preset);
    assert!(resolved.risky.is_empty());

    let merged = merge_group(&resolved.not_risky, &catalog);
    assert_eq!(
        merged.into_value(),
        json!({
            "array_syntax": {"syntax": "short"},
            "increment_style": {"style": "post"}
        })
    );
    Ok(())
}

#[test]
fn test_shared_target_keeps_both_operator_keys() -> common::TestResult {
    let catalog = RuleCatalog::builtin()?;
    let merged = merge_group(&ids(&["unalign_equals", "unalign_double_arrow"]), &catalog);

    assert_eq!(
        merged.into_value(),
        json!({
            "binary_operator_spaces": {
                "operators": {"=": "single_space", "=>": "single_space"}
            }
        })
    );
    Ok(())
}

#[test]
fn test_unmapped_rule_is_enabled_by_name() -> common::TestResult {
    let catalog = RuleCatalog::builtin()?;
    let merged = merge_group(&ids(&["no_trailing_whitespace"]), &catalog);
    assert_eq!(merged.into_value(), json!({"no_trailing_whitespace": true}));
    Ok(())
}

#[test]
fn test_unknown_rule_aborts_translation() {
    let err = translator()
        .translate(&snapshot_source(), "broken")
        .unwrap_err();

    match err {
        FixersetError::Rule(RuleError::UnknownRule(id)) => {
            assert_eq!(id.as_str(), "not_a_real_fixer");
        }
        other => panic!("Expected UnknownRule, got {:?}", other),
    }
}

#[test]
fn test_missing_preset_aborts_translation() {
    let err = translator()
        .translate(&snapshot_source(), "symfony")
        .unwrap_err();
    assert!(matches!(
        err,
        FixersetError::Rule(RuleError::PresetNotFound(ref name)) if name == "symfony"
    ));
}

#[test]
fn test_rendering_is_byte_identical_across_runs() {
    let first = render_literal(
        &assert_ok!(translator().translate(&snapshot_source(), "laravel")),
        "    ",
    );
    let second = render_literal(
        &assert_ok!(translator().translate(&snapshot_source(), "laravel")),
        "    ",
    );
    assert_eq!(first, second);
}

#[test]
fn test_custom_labels() -> common::TestResult {
    let labels = GroupLabels {
        standard: "@Acme".to_string(),
        risky: "@Acme:risky".to_string(),
        base_preset: "@PER-CS".to_string(),
    };
    let translator = Translator::new(RuleCatalog::builtin()?, labels);
    let doc = translator.translate(&snapshot_source(), "psr2")?;

    let value = doc.to_value();
    assert_eq!(value["@Acme"]["@PER-CS"], json!(true));
    assert_eq!(value["@Acme:risky"], json!({}));
    Ok(())
}
