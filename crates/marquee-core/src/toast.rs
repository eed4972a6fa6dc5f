use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Holds at most one toast and expires it after a number of UI ticks.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    remaining: u8,
}

impl ToastSlot {
    /// Show `toast` for `ticks` ticks, replacing any toast on screen.
    pub fn show(&mut self, toast: Toast, ticks: u8) {
        self.current = Some(toast);
        self.remaining = ticks.max(1);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Tick the timer down, clearing the toast when it runs out.
    pub fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.current = None;
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.remaining = 0;
    }
}
