//! Real-time monitoring over a streaming detector.

use detector_api::MonitorConfig;
use detector_spi::{Alert, Result, StreamingDetector};

use crate::alerting::create_alert;

/// Wraps a streaming detector and turns anomalous verdicts into alerts.
///
/// Timestamps pass through to the alert untouched; the detection algorithm
/// never reads them.
pub struct Monitor<D: StreamingDetector> {
    detector: D,
    threshold: f64,
    config: MonitorConfig,
}

impl<D: StreamingDetector> Monitor<D> {
    /// Create a new monitor over the given detector.
    ///
    /// `threshold` is the detector's own z-score threshold; alerts escalate
    /// to critical at `threshold * config.critical_multiplier`.
    pub fn new(detector: D, threshold: f64, config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            detector,
            threshold,
            config,
        })
    }

    /// Push one sample through the detector.
    ///
    /// Returns an alert when the value is classified as anomalous, `None`
    /// otherwise (including throughout the warm-up period). Input errors
    /// propagate; the caller decides whether to skip or halt.
    pub fn push(&mut self, timestamp: u64, value: f64) -> Result<Option<Alert>> {
        let result = self.detector.evaluate(value)?;
        if result.is_anomaly {
            let cutoff = self.threshold * self.config.critical_multiplier;
            return Ok(Some(create_alert(timestamp, value, result.z_score, cutoff)));
        }
        Ok(None)
    }

    /// Get the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get mutable reference to the detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::EwmaDetector;
    use detector_spi::{AlertSeverity, DetectorError};

    fn monitor(window: usize, threshold: f64) -> Monitor<EwmaDetector> {
        let detector = EwmaDetector::new(window, 0.1, threshold).unwrap();
        Monitor::new(detector, threshold, MonitorConfig::default()).unwrap()
    }

    #[test]
    fn test_no_alert_during_warm_up() {
        let mut monitor = monitor(5, 3.0);
        for t in 0..4 {
            assert!(monitor.push(t, 1_000_000.0).unwrap().is_none());
        }
    }

    #[test]
    fn test_alert_carries_timestamp_and_value() {
        let mut monitor = monitor(3, 3.0);
        for t in 0..6 {
            monitor.push(t, 10.0).unwrap();
        }
        let alert = monitor.push(99, 100.0).unwrap().expect("spike should alert");
        assert_eq!(alert.timestamp, 99);
        assert_eq!(alert.value, 100.0);
        assert!(alert.z_score > 3.0);
    }

    #[test]
    fn test_severity_escalates_with_multiplier() {
        // z = 10 on this spike; critical cutoff is 3.0 * 2.0 = 6.0.
        let mut monitor = monitor(3, 3.0);
        for t in 0..6 {
            monitor.push(t, 10.0).unwrap();
        }
        let alert = monitor.push(6, 100.0).unwrap().unwrap();
        assert_eq!(alert.severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_input_error_propagates() {
        let mut monitor = monitor(3, 3.0);
        assert!(matches!(
            monitor.push(0, f64::NAN),
            Err(DetectorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_monitor_config_rejected() {
        let detector = EwmaDetector::new(3, 0.1, 3.0).unwrap();
        assert!(Monitor::new(detector, 3.0, MonitorConfig::new(0.0)).is_err());
    }

    #[test]
    fn test_detector_accessors() {
        let mut monitor = monitor(3, 3.0);
        assert_eq!(monitor.detector().window_size(), 3);
        monitor.detector_mut().evaluate(1.0).unwrap();
        assert_eq!(monitor.detector().history_len(), 1);
    }
}
