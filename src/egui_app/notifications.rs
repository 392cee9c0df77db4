//! Transient notifications shown over the current view.

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

pub const RECEIPT_ADDED: &str = "✅ Receipt added successfully!";
pub const SUPPLIER_ADDED: &str = "✅ Supplier added successfully!";
pub const RECEIPT_DELETED: &str = "🗑️ Receipt deleted";
pub const SUPPLIER_DELETED: &str = "🗑️ Supplier deleted";
pub const RECEIPT_DELETE_FAILED: &str = "❌ Failed to delete receipt";
pub const SUPPLIER_DELETE_FAILED: &str = "❌ Failed to delete supplier";
pub const LOAD_FAILED: &str = "❌ Failed to load data from server";

/// Text of a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn receipt_add_failed(reason: &str) -> Self {
        Self(format!("❌ Failed to add receipt: {}", reason))
    }

    pub fn supplier_add_failed(reason: &str) -> Self {
        Self(format!("❌ Failed to add supplier: {}", reason))
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notice: Notice,
    shown_at: Instant,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        tracing::debug!("Notification: {}", notice.text());
        self.toasts.push(Toast {
            notice,
            shown_at: now,
        });
    }

    pub fn extend(&mut self, notices: impl IntoIterator<Item = Notice>, now: Instant) {
        for notice in notices {
            self.push(notice, now);
        }
    }

    /// Drop toasts older than the TTL
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < NOTICE_TTL);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.toasts.iter().map(|toast| &toast.notice)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
