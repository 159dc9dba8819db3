//! Randint Sensor Library
//!
//! A configurable random-integer data source with a sensor-style
//! read/command interface, for exercising downstream data pipelines.
//!
//! # Features
//!
//! - Uniform integers in `[low, high)` for any of eight integer dtypes
//! - One or several named readings per sample
//! - Reproducible output from an explicit seed
//! - `get_config`, `reseed` and `generate_batch` commands
//!
//! # Crates
//!
//! - `randint_core` - configuration model and validation
//! - `randint_generator` - seeded sampling and command dispatch
//!
//! # CLI Usage
//!
//! ```bash
//! # Print one sample every 500ms, ten times
//! randint-sensor readings --config sensor.yaml --interval 500ms --count 10
//!
//! # Run a command against a freshly built sensor
//! randint-sensor command --config sensor.yaml '{"command": "generate_batch", "size": 3}'
//!
//! # Check a configuration
//! randint-sensor validate --attributes '{"low": -40, "high": 100, "dtype": "int8"}'
//! ```

pub mod config;
pub mod sensor;

pub use config::SensorOpts;
pub use randint_core::{ConfigError, Dtype, GeneratorConfig};
pub use randint_generator::{Batch, CommandError, ReadingGenerator, Readings};
pub use sensor::{new_sensor, validate_config, Geometry, Model, Sensor, MODEL};
