//! Warnings with colored terminal output.
//!
//! Each unique message is printed once per process, so a hint repeated for
//! many inputs does not flood stderr.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Warnings already printed, keyed by component and message.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Print a warning for `component` unless the same one was printed before.
///
/// # Example
/// ```
/// selkit_common::warning::warn_once("cli", "class value \".nav\" starts with '.'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_occurrence(&format!("[{component}] {message}")) {
        let line = format!("[selkit {component}] warning: {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Forget every recorded warning.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Record `key`, returning whether it was new.
fn first_occurrence(key: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key.to_string())
}
