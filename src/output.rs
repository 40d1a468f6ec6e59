//! Output: PHP literal rendering, block patching, and listings (human and JSONL)

pub mod human;
pub mod jsonl;
pub mod patch;
pub mod php;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use patch::{Marker, PatchOutcome, PlannedPatch, indent_continuation, replace_marked_block};
pub use php::render_literal;
