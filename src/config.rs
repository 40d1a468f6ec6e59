//! Configuration file parsing and validation

pub mod fixerset_toml;

pub use fixerset_toml::{Config, FixersetMeta, GroupsConfig, SourceConfig, TargetConfig};
