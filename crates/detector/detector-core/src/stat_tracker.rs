//! Running EWMA statistics over an unbounded stream.

use detector_spi::{DetectorError, Result};

/// Exponentially weighted running estimate of central tendency and
/// dispersion, in O(1) memory and O(1) time per update.
///
/// The mean follows `S_t = alpha * Y_t + (1 - alpha) * S_{t-1}`; the
/// dispersion is an EWMA of absolute deviations measured against the
/// updated mean. The first observation seeds the mean directly with zero
/// deviation.
#[derive(Debug, Clone)]
pub struct StatTracker {
    alpha: f64,
    ewma: Option<f64>,
    ewma_deviation: f64,
}

impl StatTracker {
    /// Create a new tracker with the given smoothing factor.
    ///
    /// `alpha` must be finite and in (0, 1]; higher values give more weight
    /// to recent observations.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(DetectorError::invalid_configuration(
                "alpha",
                "must be in (0, 1]",
            ));
        }
        Ok(Self {
            alpha,
            ewma: None,
            ewma_deviation: 0.0,
        })
    }

    /// Fold one observation into the running statistics.
    ///
    /// Non-finite values fail with [`DetectorError::InvalidInput`] and leave
    /// the state untouched.
    pub fn update(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(DetectorError::InvalidInput(value));
        }

        match self.ewma {
            None => {
                self.ewma = Some(value);
                self.ewma_deviation = 0.0;
            }
            Some(ewma) => {
                let ewma = self.alpha * value + (1.0 - self.alpha) * ewma;
                // Deviation is measured against the updated mean, not the
                // prior one; the numeric trajectory depends on this order.
                let deviation = (value - ewma).abs();
                self.ewma_deviation =
                    self.alpha * deviation + (1.0 - self.alpha) * self.ewma_deviation;
                self.ewma = Some(ewma);
            }
        }
        Ok(())
    }

    /// Current mean estimate; `None` before the first observation.
    pub fn ewma(&self) -> Option<f64> {
        self.ewma
    }

    /// Current dispersion estimate; meaningful only once the mean is set.
    pub fn ewma_deviation(&self) -> f64 {
        self.ewma_deviation
    }

    /// The smoothing factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
