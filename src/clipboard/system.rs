//! System clipboard backend
//!
//! Uses the operating system's clipboard through arboard. Fails with
//! `SystemUnavailable` in headless environments.

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::SystemUnavailable(e.to_string()))?;

    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
