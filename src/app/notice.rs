//! Transient user-facing messages.
//!
//! A notice is shown for a fixed time and then dismissed. It never touches
//! store state; it only reports the outcome of a user action.

use std::fmt;
use std::time::Duration;

use crate::app::HanjanError;

/// How long a confirmation stays visible before the view moves on.
pub const SHORT_TTL: Duration = Duration::from_secs(2);
/// Network failures stay up longer; retyping the input will not fix them.
pub const LONG_TTL: Duration = Duration::from_secs(5);

pub const GENERIC_FAILURE: &str = "오류가 발생하였습니다. 잠시 후 다시 시도해주세요.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            ttl: SHORT_TTL,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            ttl: SHORT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_visible(&self, elapsed: Duration) -> bool {
        elapsed < self.ttl
    }

    /// Maps a failed action to what the user sees. Validation and role
    /// failures carry their own message; everything else is generic.
    pub fn from_error(err: &HanjanError) -> Self {
        match err {
            HanjanError::Validation(e) => Self::error(e.to_string()),
            HanjanError::Unauthorized(e) => Self::error(e.to_string()),
            e if e.is_network() => Self::error(GENERIC_FAILURE).with_ttl(LONG_TTL),
            _ => Self::error(GENERIC_FAILURE),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "!",
        };
        write!(f, "{} {}", marker, self.message)
    }
}
