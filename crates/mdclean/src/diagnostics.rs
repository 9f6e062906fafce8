//! Diagnostic channel for non-fatal conditions.
//!
//! Unknown encodings and unresolved templates never fail the caller; they are
//! reported through a [`DiagnosticSink`] instead. The default sink forwards to
//! `tracing`, and [`MemorySink`] collects messages for inspection.

use std::sync::{Arc, Mutex};

/// Fire-and-forget warning channel. Must never block or fail the caller.
pub trait DiagnosticSink: Send + Sync {
    /// Report a non-fatal condition.
    fn warn(&self, message: &str);
}

/// Default sink that emits warnings through the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "mdclean", "{}", message);
    }
}

/// Sink that retains every message in memory.
///
/// Clones share the same buffer, so a caller can keep one handle and hand the
/// other to a [`Cleaner`](crate::Cleaner).
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
