//! Status line module - transient advisory text with clear tokens
//!
//! The engine sets a message on rule violations and notable events; the
//! caller displays it and schedules a clear after `STATUS_CLEAR_MS`. Every
//! message carries a version token, and a clear only takes effect while the
//! token's message is still the current one. A newer message therefore
//! supersedes the pending clear of an older one, and a stale clear firing
//! late is a harmless no-op.

/// Advisory message slot. Never consulted by game rules.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    text: Option<String>,
    version: u64,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the message. Returns the clear token for this message.
    pub fn set(&mut self, text: impl Into<String>) -> u64 {
        self.version += 1;
        self.text = Some(text.into());
        self.version
    }

    /// Clear the message the token belongs to.
    ///
    /// Returns false when the token is stale (a newer message took over)
    /// or nothing is displayed.
    pub fn clear(&mut self, token: u64) -> bool {
        if token == self.version && self.text.is_some() {
            self.text = None;
            return true;
        }
        false
    }

    /// Currently displayed message, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Token of the most recently set message.
    ///
    /// Tokens are never reused, so a caller can hold one across any number
    /// of later messages and its clear stays inert.
    pub fn version(&self) -> u64 {
        self.version
    }
}
