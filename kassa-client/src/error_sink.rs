//! Single-slot error channel for the operator
//!
//! Holds at most one message. A new report replaces an unacknowledged one;
//! only the latest problem is actionable.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSink {
    pending: Option<String>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface `message`, replacing anything not yet acknowledged
    pub fn report(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Reporting error to operator");
        if let Some(previous) = self.pending.replace(message) {
            tracing::debug!(superseded = %previous, "Unacknowledged error replaced");
        }
    }

    /// Clear the slot, returning what was shown
    pub fn acknowledge(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn message(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.pending.is_some()
    }
}
