//! Random integer reading generator for the randint sensor.
//!
//! This crate provides the [`ReadingGenerator`], which produces uniform
//! random integers according to a [`randint_core::GeneratorConfig`]. An
//! explicit seed makes the sequence reproducible; without one the generator
//! is seeded from OS entropy.
//!
//! # Architecture
//!
//! ```text
//! attributes (JSON map)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   ReadingGenerator   │
//! │                      │
//! │  Mutex<              │
//! │    config            │
//! │    rng (StdRng)      │
//! │  >                   │
//! └──────────┬───────────┘
//!            │
//!            ├── get_readings()  -> Readings { name -> value }
//!            └── do_command()    -> get_config | reseed | generate_batch
//! ```
//!
//! # Example
//!
//! ```rust
//! use randint_generator::ReadingGenerator;
//! use serde_json::json;
//!
//! let attributes = json!({
//!     "low": -40,
//!     "high": 100,
//!     "num_readings": 3,
//!     "reading_names": ["temp_cpu", "temp_gpu", "temp_ambient"],
//!     "dtype": "int8",
//!     "seed": 42
//! });
//! let generator =
//!     ReadingGenerator::from_attributes("temps", attributes.as_object().unwrap()).unwrap();
//!
//! let readings = generator.get_readings();
//! assert_eq!(readings.len(), 3);
//!
//! let command = json!({ "command": "generate_batch", "size": 3 });
//! let response = generator.do_command(command.as_object().unwrap()).unwrap();
//! assert_eq!(response["batch_size"], 3);
//! ```
//!
//! # Commands
//!
//! - `get_config` - Current configuration as a map
//! - `reseed` - Replace the RNG with one seeded from `seed`
//! - `generate_batch` - Draw `size` samples

pub mod command;
pub mod generator;
pub mod readings;
pub mod sampling;

// Re-exports for convenience
pub use command::{Command, CommandError, MAX_BATCH_SIZE};
pub use generator::ReadingGenerator;
pub use readings::{Batch, Reading, Readings};
