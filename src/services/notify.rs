//! Announcement capability over desktop notifications

use notify_rust::Notification;
use tracing::{info, warn};

/// Best-effort announcement sink.
///
/// Calls are fire-and-forget from the machine's perspective:
/// implementations swallow their own failures and must never block or
/// alter the machine's timing.
pub trait Notifier: Send + 'static {
    fn announce(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn announce(&self, message: &str) {
        (**self).announce(message);
    }
}

/// Shows a desktop notification for each announcement
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn announce(&self, message: &str) {
        info!("Announcing: {}", message);

        // A denied or missing notification service degrades to "no
        // announcement shown"
        if let Err(e) = Notification::new()
            .summary("Pomodoro Timer")
            .body(message)
            .show()
        {
            warn!("Failed to show notification: {}", e);
        }
    }
}

/// Discards every announcement (used with --quiet)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn announce(&self, _message: &str) {}
}

/// Records announcements for test assertions
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn announce(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
