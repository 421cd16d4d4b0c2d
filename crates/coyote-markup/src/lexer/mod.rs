//! Character-level routing for the template grammar.

/// Raw-text and comment body scanning.
pub mod alt_text;
/// The transition table.
pub mod route;
/// Lexer states.
pub mod state;

pub use alt_text::AltTextScanner;
pub use route::route;
pub use state::LexerState;
