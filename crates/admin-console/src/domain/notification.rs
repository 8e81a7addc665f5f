//! Single-slot transient notifications.
//!
//! Lifecycle of one notification, measured from `show`:
//!
//! ```text
//! 0ms ── Entering ── 10ms ── Visible ── 3000ms ── Hiding ── 3300ms ── removed
//! ```
//!
//! Showing a new notification removes the current one; nothing queues.

use std::time::Duration;

use tokio::time::Instant;

/// Delay before a new notification becomes visible.
pub const SHOW_DELAY: Duration = Duration::from_millis(10);

/// How long a notification stays visible (measured from `show`).
pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);

/// Length of the hide transition.
pub const HIDE_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Hiding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

impl Notification {
    /// Phase at `now`, or `None` once the hide transition is over.
    pub fn phase(&self, now: Instant) -> Option<NotificationPhase> {
        let age = now.saturating_duration_since(self.shown_at);
        if age < SHOW_DELAY {
            Some(NotificationPhase::Entering)
        } else if age < VISIBLE_FOR {
            Some(NotificationPhase::Visible)
        } else if age < VISIBLE_FOR + HIDE_TRANSITION {
            Some(NotificationPhase::Hiding)
        } else {
            None
        }
    }
}

/// The notification area.
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    /// Show `message`, pre-empting whatever is displayed.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// The notification and its phase at `now`, if one is still alive.
    pub fn current(&self, now: Instant) -> Option<(&Notification, NotificationPhase)> {
        let notification = self.current.as_ref()?;
        notification.phase(now).map(|phase| (notification, phase))
    }

    /// Drop the notification once its lifecycle has ended.
    pub fn prune(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.phase(now).is_none())
        {
            self.current = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
