use crate::scheduler::{Scheduler, TimerHandle, TimerKey};

/// How long a notification stays up before it dismisses itself.
pub const NOTIFICATION_TTL_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at_ms: u64,
}

/// Single-slot notification holder. A new post replaces the current message
/// and restarts the expiry timer; there is no queue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationChannel {
    current: Option<Notification>,
    expiry: Option<TimerHandle>,
}

impl NotificationChannel {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn post(
        &mut self,
        scheduler: &mut Scheduler,
        message: impl Into<String>,
        kind: NotificationKind,
    ) {
        if let Some(previous) = self.expiry.take() {
            scheduler.cancel(previous);
        }
        let message = message.into();
        smartbase_logging::smartbase_debug!("notification posted kind={:?} message={}", kind, message);
        self.current = Some(Notification {
            message,
            kind,
            expires_at_ms: scheduler.now_ms().saturating_add(NOTIFICATION_TTL_MS),
        });
        self.expiry = Some(scheduler.schedule(NOTIFICATION_TTL_MS, TimerKey::NotificationExpiry));
    }

    /// Clears the slot immediately. Returns whether anything was showing.
    pub fn dismiss(&mut self, scheduler: &mut Scheduler) -> bool {
        if let Some(handle) = self.expiry.take() {
            scheduler.cancel(handle);
        }
        self.current.take().is_some()
    }

    /// Expiry callback. Ignored unless `handle` is the live expiry timer.
    pub(crate) fn on_expired(&mut self, handle: TimerHandle) -> bool {
        if self.expiry != Some(handle) {
            return false;
        }
        self.expiry = None;
        self.current.take().is_some()
    }
}
