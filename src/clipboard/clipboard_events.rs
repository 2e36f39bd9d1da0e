use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;
use crate::codes::{is_valid_ifsc, is_valid_micr};

/// Ctrl+Y copies the highlighted suggestion's code, or the search text
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_focused_content(app);
        return true;
    }

    false
}

fn copy_focused_content(app: &mut App) -> bool {
    let text = match app.autocomplete.focused() {
        Some(suggestion) => suggestion.value.clone(),
        None => app.query().trim().to_string(),
    };

    if text.is_empty() {
        app.notification.info("Nothing to copy");
        return false;
    }

    copy_text(app, &text)
}

/// Copy `text` and report the outcome as a toast
pub fn copy_text(app: &mut App, text: &str) -> bool {
    let (copied, failed) = copy_messages(text);

    match copy_to_clipboard(text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.success(copied);
            true
        }
        Err(e) => {
            log::warn!("Copy failed: {}", e);
            app.notification.error(failed);
            false
        }
    }
}

fn copy_messages(text: &str) -> (&'static str, &'static str) {
    if is_valid_ifsc(text) {
        ("IFSC code copied to clipboard!", "Failed to copy IFSC code")
    } else if is_valid_micr(text) {
        ("MICR code copied to clipboard!", "Failed to copy MICR code")
    } else {
        ("Copied to clipboard!", "Failed to copy text")
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
