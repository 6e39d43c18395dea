//! Notification state.

use std::time::{Duration, Instant};

/// How long a notification stays up before auto-dismissing.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A transient user-facing message.
#[derive(Debug)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

/// Holds the currently visible notification, if any.
#[derive(Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
}

impl NoticeState {
    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, NoticeKind::Error);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, NoticeKind::Success);
    }

    fn show(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.current = Some(Notice {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Drops the notification once it has been visible for the full TTL.
    ///
    /// Called from the reducer on every tick.
    pub fn check_timeout(&mut self) {
        if let Some(notice) = &self.current
            && notice.shown_at.elapsed() >= NOTICE_TTL
        {
            self.current = None;
        }
    }

    /// Moves the current notification's show time into the past.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        if let Some(notice) = &mut self.current {
            notice.shown_at -= by;
        }
    }
}
