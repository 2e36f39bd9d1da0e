//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// System clipboard is not available
    #[error("system clipboard unavailable: {0}")]
    SystemUnavailable(String),

    /// Error writing to clipboard
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Copy text to clipboard using the specified backend
///
/// - `System`: OS clipboard only (arboard)
/// - `Osc52`: terminal escape sequence only
/// - `Auto`: system clipboard first, OSC 52 if that fails
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("System clipboard failed ({}), falling back to OSC 52", e);
            osc52::copy(text)
        }),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
