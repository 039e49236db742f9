// src/domain/services/notifier.rs
use crate::domain::notification::Notification;

/// Fire-and-forget outlet for user-facing messages
pub trait Notifier: std::fmt::Debug + Send + Sync {
    fn notify(&self, notification: Notification);
}
