//! Compiler warnings with colored terminal output.
//!
//! Provides deduplication so a template with hundreds of identical problems
//! reports each one once. Used by the markup crate to flag elements a
//! dialect refuses to emit.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning, returning `true` if it has not been seen before.
///
/// A poisoned lock only means another thread panicked mid-insert; the set
/// itself is still usable.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a template problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Rules", "client rules ban <script>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(format!("[{component}] {message}")) {
        eprintln!("{YELLOW}[Coyote {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when starting a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
