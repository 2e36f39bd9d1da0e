//! Notification module
//!
//! Toasts: one transient message at a time in the top-right corner. Showing
//! a new toast replaces the current one. A toast stays for a fixed display
//! window, fades, then disappears on the next tick.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState, ToastPhase};
