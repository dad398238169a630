//! Alert types for streaming anomaly detection.

use serde::{Deserialize, Serialize};

/// Alert severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// An alert triggered by an anomalous stream value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unix timestamp in milliseconds of the offending sample.
    pub timestamp: u64,
    /// The value that was flagged.
    pub value: f64,
    /// The z-score that tripped the threshold.
    pub z_score: f64,
    pub severity: AlertSeverity,
    pub message: String,
}
