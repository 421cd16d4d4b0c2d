//! Error types for the markup crate.

use thiserror::Error;

/// Failure to select a [`Ruleset`](crate::Ruleset) by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetError {
    /// The name matched none of `server`, `client`, `xml`.
    #[error("unknown ruleset '{0}', expected one of: server, client, xml")]
    Unknown(String),
}
