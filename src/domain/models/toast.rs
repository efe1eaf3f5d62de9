use std::time::Duration;
use std::time::Instant;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient notification shown in the corner of the screen.
#[derive(Clone, Debug)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
    created_at: Instant,
}

impl Toast {
    pub fn new(level: ToastLevel, text: &str) -> Toast {
        return Toast {
            level,
            text: text.to_string(),
            created_at: Instant::now(),
        };
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        return now.saturating_duration_since(self.created_at) >= TOAST_LIFETIME;
    }
}
