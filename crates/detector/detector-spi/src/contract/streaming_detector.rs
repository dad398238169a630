//! Streaming detector trait definition.

use crate::error::Result;
use crate::model::EvaluationResult;

/// Streaming anomaly detector trait.
///
/// Implementations consume one scalar value at a time, update their running
/// statistics, and classify the value against the stream's recent behavior.
pub trait StreamingDetector: Send + Sync {
    /// Consume one value, update state, and classify it.
    ///
    /// Fails with [`crate::DetectorError::InvalidInput`] for non-finite
    /// values; on failure no state is mutated. The caller decides whether
    /// to skip the sample or halt the stream.
    fn evaluate(&mut self, value: f64) -> Result<EvaluationResult>;

    /// Whether the warm-up period is over and verdicts are real.
    ///
    /// While this returns `false`, `evaluate` still updates statistics but
    /// always reports `is_anomaly = false`. The transition to active is
    /// one-way for the life of the detector.
    fn is_active(&self) -> bool;
}
