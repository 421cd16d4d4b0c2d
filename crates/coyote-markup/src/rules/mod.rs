//! Per-dialect tag rules.

mod ruleset;
mod tables;

pub use ruleset::Ruleset;
