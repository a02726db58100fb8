//! Toast notifications shown after create, update and delete

use std::time::{Duration, Instant};

/// How long a toast stays up before it is considered expired
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// When the toast was raised, on the caller's clock
    pub timestamp: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, timestamp: Instant) -> Self {
        Self {
            message: message.into(),
            timestamp,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) >= TOAST_TTL
    }
}
