//! Contract definitions for streaming anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod streaming_detector;

pub use streaming_detector::StreamingDetector;
