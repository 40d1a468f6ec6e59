#![forbid(unsafe_code)]

//! Rule catalog and rule option values

pub mod catalog;
pub mod value;

// Re-export core types
pub use catalog::{CatalogEntry, RuleCatalog};
pub use value::{OptionMap, deep_realize, merge_map, merge_value};
