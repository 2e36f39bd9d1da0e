use std::time::{Duration, Instant};

use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
    fade: Duration,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}

impl NotificationState {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            current: None,
            duration: Duration::from_millis(config.duration_ms),
            fade: Duration::from_millis(config.fade_ms),
        }
    }

    pub fn show(&mut self, message: &str, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: &str, kind: NotificationKind, now: Instant) {
        log::debug!("Toast ({:?}): {}", kind, message);
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: now,
        });
    }

    pub fn info(&mut self, message: &str) {
        self.show(message, NotificationKind::Info);
    }

    pub fn success(&mut self, message: &str) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&mut self, message: &str) {
        self.show(message, NotificationKind::Error);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Phase of the current toast at `now`, `None` once it has expired
    pub fn phase(&self, now: Instant) -> Option<ToastPhase> {
        let notification = self.current.as_ref()?;
        let age = now.saturating_duration_since(notification.shown_at);

        if age < self.duration {
            Some(ToastPhase::Visible)
        } else if age < self.duration + self.fade {
            Some(ToastPhase::Fading)
        } else {
            None
        }
    }

    /// Drop an expired toast. Returns true if one was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.phase(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }
}
