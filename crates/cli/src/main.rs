//! # streampulse-cli
//!
//! Command-line interface for streampulse streaming anomaly detection.

use clap::{Parser, Subcommand};
use detector::{EwmaDetector, Monitor, MonitorConfig, StreamingDetector};
use std::fs;
use std::path::PathBuf;
use stream::{SeasonalPattern, SimulatorConfig, StreamSample, StreamSimulator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "streampulse")]
#[command(about = "Streaming anomaly detection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the synthetic stream through a live monitor
    Monitor {
        /// Number of samples to stream
        #[arg(short, long, default_value_t = 1000)]
        steps: u64,

        /// Warm-up window size
        #[arg(short, long, default_value_t = 100)]
        window_size: usize,

        /// EWMA smoothing factor, in (0, 1]
        #[arg(short, long, default_value_t = 0.1)]
        alpha: f64,

        /// Z-score threshold
        #[arg(short, long, default_value_t = 3.0)]
        threshold: f64,

        /// Seasonal pattern (daily, flat)
        #[arg(short, long, default_value = "daily")]
        pattern: String,

        /// Gaussian noise level of the simulated stream
        #[arg(long, default_value_t = 0.2)]
        noise_level: f64,

        /// Per-sample anomaly injection probability
        #[arg(long, default_value_t = 0.01)]
        anomaly_probability: f64,

        /// RNG seed for a reproducible stream
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Emit alerts as JSON lines instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Detect anomalies in values read from a file
    Detect {
        /// Input file: JSON array or newline-separated values
        #[arg(short, long)]
        input: PathBuf,

        /// Warm-up window size
        #[arg(short, long, default_value_t = 10)]
        window_size: usize,

        /// EWMA smoothing factor, in (0, 1]
        #[arg(short, long, default_value_t = 0.1)]
        alpha: f64,

        /// Z-score threshold
        #[arg(short, long, default_value_t = 3.0)]
        threshold: f64,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Monitor {
            steps,
            window_size,
            alpha,
            threshold,
            pattern,
            noise_level,
            anomaly_probability,
            seed,
            json,
        } => run_monitor(
            steps,
            window_size,
            alpha,
            threshold,
            &pattern,
            noise_level,
            anomaly_probability,
            seed,
            json,
        ),
        Commands::Detect {
            input,
            window_size,
            alpha,
            threshold,
        } => run_detect(&input, window_size, alpha, threshold),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn parse_pattern(name: &str) -> CliResult<SeasonalPattern> {
    match name.to_lowercase().as_str() {
        "daily" => Ok(SeasonalPattern::Daily),
        "flat" => Ok(SeasonalPattern::Flat),
        other => Err(format!("unknown pattern '{}' (expected daily or flat)", other)),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_monitor(
    steps: u64,
    window_size: usize,
    alpha: f64,
    threshold: f64,
    pattern: &str,
    noise_level: f64,
    anomaly_probability: f64,
    seed: u64,
    json: bool,
) -> CliResult<()> {
    let mut simulator = StreamSimulator::new(SimulatorConfig {
        pattern: parse_pattern(pattern)?,
        noise_level,
        anomaly_probability,
        seed,
    })
    .map_err(|e| e.to_string())?;

    let detector =
        EwmaDetector::new(window_size, alpha, threshold).map_err(|e| e.to_string())?;
    let mut monitor =
        Monitor::new(detector, threshold, MonitorConfig::default()).map_err(|e| e.to_string())?;

    tracing::info!(
        steps,
        window_size,
        alpha,
        threshold,
        seed,
        "starting monitor"
    );

    let mut alerts = 0u64;
    for _ in 0..steps {
        let StreamSample { timestamp, value } = simulator.next_sample();
        // The simulator only produces finite values, so evaluation errors
        // here indicate a bug worth halting on.
        if let Some(alert) = monitor.push(timestamp, value).map_err(|e| e.to_string())? {
            alerts += 1;
            if json {
                let line = serde_json::to_string(&alert).map_err(|e| e.to_string())?;
                println!("{}", line);
            } else {
                println!(
                    "[{}] {:?}: value={:.4} z={:.4}",
                    alert.timestamp, alert.severity, alert.value, alert.z_score
                );
            }
        }
    }

    tracing::info!(alerts, steps, "monitor finished");
    Ok(())
}

fn run_detect(input: &PathBuf, window_size: usize, alpha: f64, threshold: f64) -> CliResult<()> {
    let values = read_values(input)?;
    let mut detector =
        EwmaDetector::new(window_size, alpha, threshold).map_err(|e| e.to_string())?;

    let mut anomalies = Vec::new();
    let mut skipped = 0usize;
    for (index, value) in values.iter().copied().enumerate() {
        match detector.evaluate(value) {
            Ok(result) => {
                if result.is_anomaly {
                    println!("#{}: value={:.4} z={:.4}", index, value, result.z_score);
                    anomalies.push(index);
                }
            }
            Err(error) => {
                // Transient bad input: skip the sample, keep the stream going.
                tracing::warn!(index, %error, "skipping sample");
                skipped += 1;
            }
        }
    }

    println!(
        "{} anomalies in {} values ({} skipped)",
        anomalies.len(),
        values.len(),
        skipped
    );
    Ok(())
}

/// Read values from a JSON array or a newline-separated text file.
fn read_values(path: &PathBuf) -> CliResult<Vec<f64>> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;

    let trimmed = contents.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(&contents).map_err(|e| format!("invalid JSON input: {}", e));
    }

    contents
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| format!("invalid value '{}': {}", token, e))
        })
        .collect()
}
