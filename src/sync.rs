/// Best-effort push of the live reading to the remote store.
///
/// One attempt, bounded timeout, no retry. Readings are periodic and
/// redundant, so a missed push only costs one history row; the outcome is
/// returned as a value the caller can log and show as a warning, and it
/// never blocks building the report.

use std::time::Duration;

use crate::model::Reading;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Observable completion status of a single push attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The endpoint answered. Any status counts: the reference store
    /// answers with a redirect that still means "received".
    Synced(u16),
    /// The bounded attempt ran out of time.
    TimedOut,
    /// Transport-level failure (DNS, connect, TLS).
    Failed(String),
}

impl SyncOutcome {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced(_))
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP adapter for the reading-append endpoint. The endpoint URL is
/// injected at construction, never read from a global.
pub struct SyncClient {
    client: reqwest::blocking::Client,
    script_url: String,
    timeout: Duration,
}

impl SyncClient {
    pub fn new(script_url: String, timeout: Duration) -> Self {
        SyncClient {
            client: reqwest::blocking::Client::new(),
            script_url,
            timeout,
        }
    }

    /// Pushes one reading as JSON with the canonical field names.
    pub fn push_reading(&self, reading: &Reading) -> SyncOutcome {
        let result = self
            .client
            .post(&self.script_url)
            .timeout(self.timeout)
            .json(reading)
            .send();

        match result {
            Ok(response) => SyncOutcome::Synced(response.status().as_u16()),
            Err(e) if e.is_timeout() => SyncOutcome::TimedOut,
            Err(e) => SyncOutcome::Failed(e.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
