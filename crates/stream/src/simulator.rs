//! Synthetic seasonal stream simulator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sample::StreamSample;

/// Stream simulator errors.
#[derive(Debug, Clone, Error)]
pub enum StreamError {
    /// Configuration parameter out of range.
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Seasonal shape of the simulated baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonalPattern {
    /// 24-hour sinusoid: `10 + 5 sin(2π · (t mod 24) / 24)`.
    Daily,
    /// Constant baseline of 10.
    Flat,
}

/// Simulator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub pattern: SeasonalPattern,
    /// Standard deviation of the gaussian noise added to the baseline.
    pub noise_level: f64,
    /// Per-sample probability of injecting an anomaly, in [0, 1].
    pub anomaly_probability: f64,
    /// RNG seed; identical seeds reproduce identical streams.
    pub seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            pattern: SeasonalPattern::Daily,
            noise_level: 0.1,
            anomaly_probability: 0.01,
            seed: 0,
        }
    }
}

/// Synthetic data stream with seasonality, noise, and injected anomalies.
///
/// Anomalies come in three shapes, chosen uniformly: a 3x spike, a 0.1x
/// drop, or a random deviation of one baseline's width. All randomness is
/// drawn from one seeded generator injected at construction; there is no
/// process-global RNG involved.
pub struct StreamSimulator {
    pattern: SeasonalPattern,
    anomaly_probability: f64,
    noise: Normal<f64>,
    time_index: u64,
    rng: StdRng,
}

impl StreamSimulator {
    /// Create a simulator from configuration.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        if !config.noise_level.is_finite() || config.noise_level < 0.0 {
            return Err(StreamError::InvalidParameter {
                name: "noise_level".to_string(),
                reason: "must be a finite non-negative number".to_string(),
            });
        }
        if !config.anomaly_probability.is_finite()
            || !(0.0..=1.0).contains(&config.anomaly_probability)
        {
            return Err(StreamError::InvalidParameter {
                name: "anomaly_probability".to_string(),
                reason: "must be in [0, 1]".to_string(),
            });
        }

        // noise_level was validated above, so the distribution is well-formed
        let noise = Normal::new(0.0, config.noise_level).map_err(|e| {
            StreamError::InvalidParameter {
                name: "noise_level".to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            pattern: config.pattern,
            anomaly_probability: config.anomaly_probability,
            noise,
            time_index: 0,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Baseline value for the current time index.
    fn baseline(&self) -> f64 {
        match self.pattern {
            SeasonalPattern::Daily => {
                let hour = (self.time_index % 24) as f64;
                10.0 + 5.0 * (2.0 * std::f64::consts::PI * hour / 24.0).sin()
            }
            SeasonalPattern::Flat => 10.0,
        }
    }

    /// Generate the next value in the stream.
    pub fn next_value(&mut self) -> f64 {
        let baseline = self.baseline();
        self.time_index += 1;

        if self.rng.gen::<f64>() < self.anomaly_probability {
            return match self.rng.gen_range(0..3u8) {
                0 => baseline * 3.0,
                1 => baseline * 0.1,
                _ => {
                    // baseline is bounded away from zero for both patterns
                    let deviation = Normal::new(0.0, baseline.abs())
                        .map(|d| d.sample(&mut self.rng))
                        .unwrap_or(0.0);
                    baseline + deviation
                }
            };
        }

        baseline + self.noise.sample(&mut self.rng)
    }

    /// Generate the next value stamped with the current wall-clock time.
    pub fn next_sample(&mut self) -> StreamSample {
        StreamSample::now(self.next_value())
    }

    /// How many values have been generated so far.
    pub fn time_index(&self) -> u64 {
        self.time_index
    }
}

impl Iterator for StreamSimulator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config(pattern: SeasonalPattern) -> SimulatorConfig {
        SimulatorConfig {
            pattern,
            noise_level: 0.0,
            anomaly_probability: 0.0,
            seed: 7,
        }
    }

    #[test]
    fn test_noise_level_validation() {
        let mut config = SimulatorConfig::default();
        config.noise_level = -1.0;
        assert!(StreamSimulator::new(config).is_err());
        config.noise_level = f64::NAN;
        assert!(StreamSimulator::new(config).is_err());
    }

    #[test]
    fn test_probability_validation() {
        let mut config = SimulatorConfig::default();
        config.anomaly_probability = 1.5;
        assert!(StreamSimulator::new(config).is_err());
        config.anomaly_probability = -0.1;
        assert!(StreamSimulator::new(config).is_err());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let config = SimulatorConfig::default();
        let a: Vec<f64> = StreamSimulator::new(config).unwrap().take(200).collect();
        let b: Vec<f64> = StreamSimulator::new(config).unwrap().take(200).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_stream() {
        let mut config = SimulatorConfig::default();
        let a: Vec<f64> = StreamSimulator::new(config).unwrap().take(50).collect();
        config.seed = 1;
        let b: Vec<f64> = StreamSimulator::new(config).unwrap().take(50).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_daily_pattern_repeats_every_24_steps() {
        let mut sim = StreamSimulator::new(quiet_config(SeasonalPattern::Daily)).unwrap();
        let first_day: Vec<f64> = (0..24).map(|_| sim.next_value()).collect();
        let second_day: Vec<f64> = (0..24).map(|_| sim.next_value()).collect();
        assert_eq!(first_day, second_day);

        // Peak at hour 6, trough at hour 18
        assert!((first_day[6] - 15.0).abs() < 1e-9);
        assert!((first_day[18] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_pattern_is_constant() {
        let mut sim = StreamSimulator::new(quiet_config(SeasonalPattern::Flat)).unwrap();
        for _ in 0..48 {
            assert_eq!(sim.next_value(), 10.0);
        }
    }

    #[test]
    fn test_anomalies_injected_at_configured_rate() {
        let config = SimulatorConfig {
            pattern: SeasonalPattern::Flat,
            noise_level: 0.01,
            anomaly_probability: 0.5,
            seed: 3,
        };
        let sim = StreamSimulator::new(config).unwrap();
        // At probability 0.5, a long run must contain values far outside
        // baseline +/- noise.
        let outliers = sim.take(500).filter(|v| (v - 10.0).abs() > 1.0).count();
        assert!(outliers > 100);
    }

    #[test]
    fn test_time_index_advances() {
        let mut sim = StreamSimulator::new(SimulatorConfig::default()).unwrap();
        assert_eq!(sim.time_index(), 0);
        sim.next_value();
        sim.next_value();
        assert_eq!(sim.time_index(), 2);
    }

    #[test]
    fn test_next_sample_carries_value() {
        let mut a = StreamSimulator::new(quiet_config(SeasonalPattern::Flat)).unwrap();
        let sample = a.next_sample();
        assert_eq!(sample.value, 10.0);
        assert!(sample.timestamp > 0);
    }
}
