use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
}

/// The status line message, cleared once its timeout passes.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    current: Option<StatusMessage>,
    expires_at: Option<Instant>,
}

impl MessageState {
    const ERROR_TIMEOUT: Duration = Duration::from_secs(3);
    const INFO_TIMEOUT: Duration = Duration::from_secs(1);

    pub fn set_error_at(&mut self, text: String, now: Instant) {
        self.set_at(text, MessageLevel::Error, now + Self::ERROR_TIMEOUT);
    }

    pub fn set_info_at(&mut self, text: String, now: Instant) {
        self.set_at(text, MessageLevel::Info, now + Self::INFO_TIMEOUT);
    }

    fn set_at(&mut self, text: String, level: MessageLevel, expires_at: Instant) {
        self.current = Some(StatusMessage { text, level });
        self.expires_at = Some(expires_at);
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if self.expires_at.is_some_and(|at| at <= now) {
            self.current = None;
            self.expires_at = None;
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}
