//! Operator-facing diagnostics raised while loading saved scores.

use tracing::warn;

/// Receiver for non-fatal load warnings
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

impl<F: Fn(&str)> DiagnosticSink for F {
    fn warn(&self, message: &str) {
        self(message)
    }
}
