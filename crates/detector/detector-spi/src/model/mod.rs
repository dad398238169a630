//! Data models for streaming anomaly detection.
//!
//! This module contains data structures used throughout the detection system.

mod alert;
mod evaluation;

pub use alert::{Alert, AlertSeverity};
pub use evaluation::EvaluationResult;
