//! Command-line interface for randint-sensor
//!
//! # Usage Examples
//!
//! ## Sampling
//! ```bash
//! # One JSON line per second until Ctrl-C
//! randint-sensor readings --config sensor.yaml
//!
//! # Five samples, 200ms apart
//! randint-sensor readings --attributes '{"num_readings": 3, "seed": 42}' \
//!   --interval 200ms --count 5
//! ```
//!
//! ## Commands
//! ```bash
//! randint-sensor command --config sensor.yaml '{"command": "get_config"}'
//! randint-sensor command --config sensor.yaml '{"command": "generate_batch", "size": 10}'
//! ```
//!
//! ## Validation
//! ```bash
//! randint-sensor validate --config sensor.yaml
//! ```
//!
//! Set `RUST_LOG=debug` to see every generated reading.

use anyhow::Context;
use clap::{Parser, Subcommand};
use randint_sensor::config::parse_interval;
use randint_sensor::{new_sensor, GeneratorConfig, Sensor, SensorOpts, MODEL};
use serde_json::{Map, Value};
use tracing::info;

#[derive(Parser)]
#[command(name = "randint-sensor")]
#[command(about = "A random integer sensor for testing data pipelines")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample readings on a fixed interval and print them as JSON lines
    Readings {
        #[command(flatten)]
        sensor: SensorOpts,

        /// Time between samples (e.g. "500ms", "2s", "1m"; plain numbers are milliseconds)
        #[arg(long, default_value = "1s")]
        interval: String,

        /// Stop after this many samples (default: run until interrupted)
        #[arg(long)]
        count: Option<u64>,
    },

    /// Run a single command and print its JSON response
    Command {
        #[command(flatten)]
        sensor: SensorOpts,

        /// Command map, e.g. '{"command": "reseed", "seed": 7}'
        #[arg(value_name = "JSON")]
        command: String,
    },

    /// Validate attributes and print the normalized configuration
    Validate {
        #[command(flatten)]
        sensor: SensorOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Readings {
            sensor,
            interval,
            count,
        } => {
            let period = parse_interval(&interval)?;
            let sensor = build_sensor(&sensor)?;
            run_readings(sensor.as_ref(), period, count).await?;
        }
        Commands::Command { sensor, command } => {
            let command: Map<String, Value> = serde_json::from_str(&command)
                .with_context(|| format!("Command must be a JSON map, got {command}"))?;
            let sensor = build_sensor(&sensor)?;
            let response = sensor
                .do_command(&command)
                .context("Command failed")?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Validate { sensor } => {
            let attributes = sensor.load_attributes()?;
            let config = GeneratorConfig::from_attributes(&attributes)
                .context("Invalid sensor configuration")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn build_sensor(opts: &SensorOpts) -> anyhow::Result<Box<dyn Sensor>> {
    let attributes = opts.load_attributes()?;
    let sensor = new_sensor(&opts.name, &attributes)
        .with_context(|| format!("Failed to create {MODEL} '{}'", opts.name))?;
    Ok(sensor)
}

async fn run_readings(
    sensor: &dyn Sensor,
    period: std::time::Duration,
    count: Option<u64>,
) -> anyhow::Result<()> {
    info!(
        "Sampling '{}' every {:?}{}",
        sensor.name(),
        period,
        count.map(|c| format!(" ({c} samples)")).unwrap_or_default()
    );

    if count == Some(0) {
        return Ok(());
    }

    let mut ticker = tokio::time::interval(period);
    let mut emitted = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let readings = sensor.readings();
                println!("{}", serde_json::to_string(&readings)?);
                emitted += 1;
                if count.is_some_and(|c| emitted >= c) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted after {} samples", emitted);
                break;
            }
        }
    }

    Ok(())
}
