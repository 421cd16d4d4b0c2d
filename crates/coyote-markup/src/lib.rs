//! Lexical routing and tag semantics for the Coyote template compiler.
//!
//! # Scope
//!
//! This crate implements:
//! - **Lexer router** - a total `(char, LexerState) -> LexerState` transition
//!   table for tags, attributes, self-closing and tail tags, and `{...}`
//!   injections, plus a close-sequence scanner for raw-text bodies
//! - **Rulesets** - tag facts for server HTML, client HTML, and XML output
//! - **Tag contexts** - namespace, indentation, and text handling per element
//!
//! # Not Implemented Here
//!
//! - Driving the router over a document and buffering token text
//! - Building the element tree
//! - Serialization, escaping, and injection rendering

/// Error types.
pub mod error;
/// Character-level lexer routing.
pub mod lexer;
/// Per-dialect tag rules.
pub mod rules;
/// Per-element formatting context.
pub mod tag_info;

pub use error::RulesetError;
pub use lexer::{AltTextScanner, LexerState, route};
pub use rules::Ruleset;
pub use tag_info::{TagContext, TextFormat};
