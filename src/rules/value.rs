#![forbid(unsafe_code)]

//! Rule option values and the recursive merge used to combine them
//!
//! Option values are `serde_json::Value` trees built with `preserve_order`,
//! so mappings keep first-insertion order all the way to the rendered output.

use serde_json::{Map, Number, Value};

/// An insertion-ordered mapping from rule (or option) name to value
pub type OptionMap = Map<String, Value>;

/// Convert an untyped TOML tree into a native option value
///
/// Tables become mappings, arrays become sequences, scalars map to their
/// JSON counterparts. Datetimes are kept as their string form; non-finite
/// floats have no JSON representation and become `null`.
pub fn deep_realize(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(Number::from(i)),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(d) => Value::String(d.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(deep_realize).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, deep_realize(value)))
                .collect(),
        ),
    }
}

/// Merge `incoming` into `existing`
///
/// Two mappings merge key by key. Any other pairing (scalar, sequence, or a
/// mapping meeting a non-mapping) is resolved by replacing `existing`.
pub fn merge_value(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Object(current), Value::Object(update)) => merge_map(current, update),
        (slot, update) => *slot = update,
    }
}

/// Merge every entry of `incoming` into `target`
///
/// New keys are appended; keys already present are merged with [`merge_value`].
pub fn merge_map(target: &mut OptionMap, incoming: OptionMap) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}
