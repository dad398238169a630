//! EWMA-based streaming anomaly detector.

use std::collections::VecDeque;

use detector_api::DetectorConfig;
use detector_spi::{DetectorError, EvaluationResult, Result, StreamingDetector};

use crate::stat_tracker::StatTracker;

/// Guard against division by zero when the stream is perfectly stable.
const Z_SCORE_EPSILON: f64 = 1e-10;

/// Streaming detector that flags values deviating anomalously from the
/// stream's exponentially weighted recent behavior.
///
/// A bounded history buffer gates a warm-up period: no verdict is issued
/// until `window_size` observations have been seen. The buffer counts
/// observations only; the z-score is computed from the EWMA statistics, not
/// from a sliding-window mean. That is an intentional characteristic of the
/// algorithm, not an optimization opportunity.
#[derive(Debug, Clone)]
pub struct EwmaDetector {
    window_size: usize,
    threshold: f64,
    history: VecDeque<f64>,
    tracker: StatTracker,
}

impl EwmaDetector {
    /// Create a new detector.
    ///
    /// Fails with [`DetectorError::InvalidConfiguration`] when
    /// `window_size` is zero, `alpha` is outside (0, 1], or `threshold` is
    /// not positive.
    pub fn new(window_size: usize, alpha: f64, threshold: f64) -> Result<Self> {
        Self::from_config(DetectorConfig::new(window_size, alpha, threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window_size: config.window_size,
            threshold: config.threshold,
            history: VecDeque::with_capacity(config.window_size),
            tracker: StatTracker::new(config.alpha)?,
        })
    }

    /// The warm-up window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The z-score threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of observations currently held, saturating at `window_size`.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The underlying statistics tracker.
    pub fn tracker(&self) -> &StatTracker {
        &self.tracker
    }
}

impl Default for EwmaDetector {
    fn default() -> Self {
        // The default configuration is statically valid.
        Self::from_config(DetectorConfig::default()).expect("default config is valid")
    }
}

impl StreamingDetector for EwmaDetector {
    fn evaluate(&mut self, value: f64) -> Result<EvaluationResult> {
        // Reject before touching any state so a failed call is atomic.
        if !value.is_finite() {
            return Err(DetectorError::InvalidInput(value));
        }

        if self.history.len() == self.window_size {
            self.history.pop_front();
        }
        self.history.push_back(value);
        self.tracker.update(value)?;

        if self.history.len() < self.window_size {
            return Ok(EvaluationResult::warming_up());
        }

        // The tracker has seen at least one value by now, so the mean is set.
        let ewma = self.tracker.ewma().unwrap_or(value);
        let z_score = (value - ewma).abs() / (self.tracker.ewma_deviation() + Z_SCORE_EPSILON);
        Ok(EvaluationResult::new(z_score > self.threshold, z_score))
    }

    fn is_active(&self) -> bool {
        self.history.len() >= self.window_size
    }
}
