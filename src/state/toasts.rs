//! Toast notification queue.
//!
//! DESIGN
//! ======
//! An explicit state record provided once as context, replacing the usual
//! lazily created global container node. Each toast gets a monotonic id so
//! auto-dismiss timers stay independent: dismissing one toast never touches
//! the others, and identical messages are not deduplicated. No cap is
//! enforced on the queue.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Default display time for a toast.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

/// Visual category of a toast. Unknown inputs fall back to `Info`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Parse a kind name; anything unrecognized renders as `Info`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Warning => "toast-warning",
            Self::Info => "toast-info",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Warning => "fas fa-exclamation-triangle",
            Self::Info => "fas fa-info-circle",
        }
    }
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

/// Ordered toast queue; new toasts append at the end (bottom of the visual
/// stack).
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, text: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            text: text.into(),
            kind,
            duration_ms,
        });
        id
    }

    /// Remove one toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
