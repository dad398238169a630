//! Streaming Anomaly Detection Core
//!
//! Implementations for the EWMA statistic tracker, the streaming detector,
//! monitoring, and alerting.

mod alerting;
mod detector;
mod monitor;
mod stat_tracker;

pub use alerting::*;
pub use detector::*;
pub use monitor::*;
pub use stat_tracker::*;
