//! Strerror lookup instrumented with logging

use nbio_core::{StrerrorLookup, SystemStrerror};

/// Wraps a lookup and logs codes that have no message
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLookup<L = SystemStrerror> {
    inner: L,
}

impl<L: StrerrorLookup> LoggingLookup<L> {
    /// Wrap `inner`
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: StrerrorLookup> StrerrorLookup for LoggingLookup<L> {
    fn lookup(&self, code: i32) -> Option<Vec<u8>> {
        let found = self.inner.lookup(code);
        if found.is_none() {
            log::debug!("No system message for errno {code}, using fallback text");
        }
        found
    }
}
