use std::time::Duration;

/// How long a notification stays fully visible before it starts hiding.
pub const VISIBLE_FOR: Duration = Duration::from_millis(5000);
/// How long the hiding (fade-out) phase lasts before removal.
pub const FADE_FOR: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Hiding,
}

#[derive(Debug, Clone)]
pub struct Notification {
    kind: NotificationKind,
    text: String,
    phase: NotificationPhase,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, text)
    }

    fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            phase: NotificationPhase::Visible,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    pub fn begin_hide(&mut self) {
        self.phase = NotificationPhase::Hiding;
    }
}
