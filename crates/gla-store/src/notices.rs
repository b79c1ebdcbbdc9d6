//! User-facing notices
//!
//! Action creators report failures through a `Notifier` handed to them in the
//! `ActionContext`. `NoticeQueue` is the in-process implementation: it keeps
//! notices until the embedding surface drains them.

use chrono::{DateTime, Local};
use gla_client::ApiError;
use std::sync::{Arc, Mutex, MutexGuard};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStatus {
    Error,
    Warning,
    Success,
    Info,
}

impl NoticeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// A single notice with the time it was raised
#[derive(Debug, Clone)]
pub struct Notice {
    pub status: NoticeStatus,
    pub message: String,
    pub created_at: DateTime<Local>,
}

impl Notice {
    pub fn new(status: NoticeStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            created_at: Local::now(),
        }
    }
}

/// Sink for user-facing notices
pub trait Notifier: Send + Sync {
    fn create_notice(&self, status: NoticeStatus, message: &str);
}

/// Notifier that collects notices in memory
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notice>> {
        // A panic while holding the lock cannot leave a Vec half-written
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Take every pending notice, oldest first
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    /// Copy of the pending notices
    pub fn snapshot(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Notifier for NoticeQueue {
    fn create_notice(&self, status: NoticeStatus, message: &str) {
        self.lock().push(Notice::new(status, message));
    }
}

/// Report a failed request
///
/// An expired session (401) is only logged: the admin shell takes care of
/// re-authentication. Any other failure raises exactly one error notice with
/// `message` and logs the underlying error.
pub fn handle_fetch_error(notifier: &dyn Notifier, error: &ApiError, message: &str) {
    if error.is_unauthorized() {
        log::warn!("Request not authorized, skipping notice: {}", error);
        return;
    }
    notifier.create_notice(NoticeStatus::Error, message);
    log::error!("{} ({})", message, error);
}
