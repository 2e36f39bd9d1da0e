//! Clipboard module
//!
//! Copies text through the system clipboard, falling back to OSC 52 escape
//! sequences when no system clipboard is reachable (SSH, headless sessions).

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
