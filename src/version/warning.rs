//! Warning sink for soft failures during resolution

#[cfg(test)]
use mockall::automock;

/// Receives one message per package whose lookup failed
#[cfg_attr(test, automock)]
pub trait WarningSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarnings;

impl WarningSink for TracingWarnings {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
