//! Streaming Anomaly Detection API
//!
//! Configuration types and builders for streaming anomaly detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use detector_spi::{
    Alert, AlertSeverity, DetectorError, EvaluationResult, Result, StreamingDetector,
};

// ============================================================================
// Detector Configuration
// ============================================================================

/// EWMA detector configuration.
///
/// All parameters are fixed for the life of a detector instance; a detector
/// is reconfigured by discarding it and building a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Number of observations required before verdicts are issued (>= 1).
    pub window_size: usize,
    /// EWMA smoothing factor, in (0, 1]. Higher values react faster but are
    /// noisier.
    pub alpha: f64,
    /// Z-score threshold above which a value is flagged (> 0).
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            alpha: 0.1,
            threshold: 3.0,
        }
    }
}

impl DetectorConfig {
    pub fn new(window_size: usize, alpha: f64, threshold: f64) -> Self {
        Self {
            window_size,
            alpha,
            threshold,
        }
    }

    /// Validate all parameters, failing fast with
    /// [`DetectorError::InvalidConfiguration`] rather than letting a bad
    /// parameter produce silently meaningless statistics.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(DetectorError::invalid_configuration(
                "window_size",
                "must be >= 1",
            ));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(DetectorError::invalid_configuration(
                "alpha",
                "must be in (0, 1]",
            ));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(DetectorError::invalid_configuration(
                "threshold",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Builder for [`DetectorConfig`].
#[derive(Debug, Default)]
pub struct DetectorConfigBuilder {
    window_size: Option<usize>,
    alpha: Option<f64>,
    threshold: Option<f64>,
}

impl DetectorConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the warm-up window size.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Set the EWMA smoothing factor.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Set the z-score threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Build and validate the configuration. Unset fields fall back to the
    /// defaults (window 10, alpha 0.1, threshold 3.0).
    pub fn build(self) -> Result<DetectorConfig> {
        let defaults = DetectorConfig::default();
        let config = DetectorConfig {
            window_size: self.window_size.unwrap_or(defaults.window_size),
            alpha: self.alpha.unwrap_or(defaults.alpha),
            threshold: self.threshold.unwrap_or(defaults.threshold),
        };
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Monitor Configuration
// ============================================================================

/// Monitor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Alerts escalate to `Critical` when the z-score exceeds this multiple
    /// of the detector threshold.
    pub critical_multiplier: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            critical_multiplier: 2.0,
        }
    }
}

impl MonitorConfig {
    pub fn new(critical_multiplier: f64) -> Self {
        Self {
            critical_multiplier,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.critical_multiplier.is_finite() || self.critical_multiplier < 1.0 {
            return Err(DetectorError::invalid_configuration(
                "critical_multiplier",
                "must be >= 1",
            ));
        }
        Ok(())
    }
}
