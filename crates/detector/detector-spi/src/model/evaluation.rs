//! Per-sample evaluation result types.

use serde::{Deserialize, Serialize};

/// Classification of a single stream value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Whether the value deviates anomalously from recent behavior.
    pub is_anomaly: bool,
    /// Normalized anomaly signal: absolute deviation from the EWMA divided
    /// by the EWMA-deviation. Zero during warm-up.
    pub z_score: f64,
}

impl EvaluationResult {
    /// Create a new evaluation result.
    pub fn new(is_anomaly: bool, z_score: f64) -> Self {
        Self { is_anomaly, z_score }
    }

    /// Result reported while the detector is still warming up.
    pub fn warming_up() -> Self {
        Self {
            is_anomaly: false,
            z_score: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let result = EvaluationResult::new(true, 4.2);
        assert!(result.is_anomaly);
        assert_eq!(result.z_score, 4.2);
    }

    #[test]
    fn test_warming_up_is_never_anomalous() {
        let result = EvaluationResult::warming_up();
        assert!(!result.is_anomaly);
        assert_eq!(result.z_score, 0.0);
    }
}
