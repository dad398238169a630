//! Stream sample boundary type.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One timestamped measurement at the producer/detector boundary.
///
/// The detector is stateless with respect to timestamps; they only travel
/// alongside the value for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamSample {
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
    pub value: f64,
}

impl StreamSample {
    /// Create a sample with an explicit timestamp.
    pub fn new(timestamp: u64, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Create a sample stamped with the current wall-clock time.
    pub fn now(value: f64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self { timestamp, value }
    }
}
