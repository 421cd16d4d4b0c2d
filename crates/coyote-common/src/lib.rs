//! Common utilities for the Coyote template compiler.
//!
//! This crate provides shared infrastructure used by the compiler crates:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
