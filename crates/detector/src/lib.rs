//! # streampulse-detector
//!
//! Streaming EWMA anomaly detection for scalar measurement streams.
//!
//! This crate is the single entry point to the detector module:
//! - `StreamingDetector` trait, errors, and models from the SPI
//! - Configuration types from the API
//! - `StatTracker`, `EwmaDetector`, `Monitor`, and alerting from the core

// Re-export everything from SPI
pub use detector_spi::*;

// Re-export everything from API
pub use detector_api::*;

// Re-export everything from Core
pub use detector_core::*;
