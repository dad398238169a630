//! Basic example demonstrating streaming anomaly detection
//!
//! Run with: cargo run --example basic -p streampulse-detector

use detector::{EwmaDetector, StreamingDetector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== streampulse-detector Basic Example ===\n");

    // A stable stream with a few injected anomalies
    let values = vec![
        10.0, 10.2, 9.8, 10.1, 9.9, 10.0, 10.3, 9.7, 10.1, 10.0, // warm-up
        10.1, 9.9, 50.0, 10.2, 9.8, 10.0, 1.0, 10.1, 9.9, 10.0,
    ];

    println!("Detector: window_size=10, alpha=0.1, threshold=3.0\n");
    let mut detector = EwmaDetector::new(10, 0.1, 3.0)?;

    for (i, &value) in values.iter().enumerate() {
        let result = detector.evaluate(value)?;
        let marker = if result.is_anomaly { "  <-- ANOMALY" } else { "" };
        let phase = if detector.is_active() { "active " } else { "warm-up" };
        println!(
            "#{:02} [{}] value={:7.2} z={:6.2}{}",
            i, phase, value, result.z_score, marker
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
