//! Alerting for flagged stream values.

use detector_spi::{Alert, AlertSeverity};

/// Create an alert for a flagged sample.
///
/// Severity is `Critical` when the z-score exceeds `critical_cutoff`
/// (typically a multiple of the detector threshold), else `Warning`.
pub fn create_alert(timestamp: u64, value: f64, z_score: f64, critical_cutoff: f64) -> Alert {
    AlertBuilder::new(timestamp, value, z_score)
        .critical_cutoff(critical_cutoff)
        .build()
}

/// Alert builder for custom alert creation.
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    timestamp: u64,
    value: f64,
    z_score: f64,
    critical_cutoff: f64,
    severity: Option<AlertSeverity>,
    message: Option<String>,
}

impl AlertBuilder {
    /// Create a new alert builder.
    pub fn new(timestamp: u64, value: f64, z_score: f64) -> Self {
        Self {
            timestamp,
            value,
            z_score,
            critical_cutoff: f64::INFINITY,
            severity: None,
            message: None,
        }
    }

    /// Set the z-score above which the default severity is `Critical`.
    pub fn critical_cutoff(mut self, cutoff: f64) -> Self {
        self.critical_cutoff = cutoff;
        self
    }

    /// Set custom severity.
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set custom message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the alert.
    pub fn build(self) -> Alert {
        let severity = self.severity.unwrap_or_else(|| {
            if self.z_score > self.critical_cutoff {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Warning
            }
        });

        let message = self.message.unwrap_or_else(|| {
            format!(
                "Anomaly detected: value={:.4}, z-score={:.4}",
                self.value, self.z_score
            )
        });

        Alert {
            timestamp: self.timestamp,
            value: self.value,
            z_score: self.z_score,
            severity,
            message,
        }
    }
}
