//! # streampulse-stream
//!
//! Synthetic seasonal data stream source for streampulse.
//!
//! Stands in for a real measurement producer: a seasonal baseline with
//! gaussian noise and occasional injected anomalies, driven by an explicitly
//! seeded generator so runs are reproducible.

mod sample;
mod simulator;

pub use sample::StreamSample;
pub use simulator::{Result, SeasonalPattern, SimulatorConfig, StreamError, StreamSimulator};
