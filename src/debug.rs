//! Diagnostic capture of raw request/response exchanges.
//!
//! A [`DebugSink`] attached to the client receives a verbatim snapshot of
//! every exchange, whatever the outcome. Capture is purely observational
//! and never affects the result of a lookup.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of one HTTP exchange.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    /// Full request URL. Credentials travel in the Authorization header
    /// and are never part of the snapshot.
    pub url: String,

    /// Response status code; `None` when the transport failed before a
    /// status existed.
    pub status: Option<u16>,

    /// Raw response body; `None` when the transport failed.
    pub body: Option<String>,

    /// When the exchange completed.
    pub captured_at: DateTime<Utc>,
}

/// Receives exchange snapshots.
///
/// A sink shared across concurrently-running lookups must provide its own
/// concurrent-write safety; the client calls [`record`](Self::record)
/// without coordination.
pub trait DebugSink: Send + Sync {
    /// Record one exchange.
    fn record(&self, exchange: Exchange);
}

/// Sink that keeps exchanges in memory, oldest first.
#[derive(Debug, Default)]
pub struct MemorySink {
    exchanges: Mutex<Vec<Exchange>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the exchanges recorded so far.
    #[must_use]
    pub fn exchanges(&self) -> Vec<Exchange> {
        self.exchanges.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl DebugSink for MemorySink {
    fn record(&self, exchange: Exchange) {
        if let Ok(mut guard) = self.exchanges.lock() {
            guard.push(exchange);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.record(Exchange {
            url: "http://localhost/a".to_string(),
            status: Some(200),
            body: Some("{}".to_string()),
            captured_at: Utc::now(),
        });
        sink.record(Exchange {
            url: "http://localhost/b".to_string(),
            status: None,
            body: None,
            captured_at: Utc::now(),
        });

        let exchanges = sink.exchanges();
        assert_eq!(exchanges.len(), 2);
        assert_eq!(exchanges[0].url, "http://localhost/a");
        assert_eq!(exchanges[1].status, None);
    }
}
