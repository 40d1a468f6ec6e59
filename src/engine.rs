//! Rule translation engine
//!
//! Control flow is resolver, then merger once per group, then composer.
//! The translator wires the three together against a preset source.

pub mod composer;
pub mod merger;
pub mod resolver;
pub mod translator;

pub use composer::{GroupLabels, OutputDocument, RuleSet, compose};
pub use merger::{MergedConfig, merge_group};
pub use resolver::{MetadataLookup, ResolvedPreset, resolve};
pub use translator::Translator;
