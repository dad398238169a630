//! Error types for streaming anomaly detection.
//!
//! This module contains error types and the Result alias.

mod detector_error;

pub use detector_error::{DetectorError, Result};
