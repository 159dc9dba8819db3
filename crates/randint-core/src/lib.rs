//! Core types for the randint sensor.
//!
//! This crate provides the configuration model shared by the generator and
//! the host-facing sensor crate:
//!
//! - [`Dtype`] - Integer width/signedness constraining the bounds
//! - [`GeneratorConfig`] - Validated generator configuration
//! - [`ConfigError`] - Construction-time configuration failures
//!
//! # Architecture
//!
//! ```text
//! randint-core (this crate)
//!    │
//!    ├─── randint-generator  (sampling and command dispatch)
//!    │
//!    └─── randint-sensor     (host contract and CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use randint_core::{Dtype, GeneratorConfig};
//!
//! let config = GeneratorConfig::from_json(r#"{
//!     "low": -40,
//!     "high": 100,
//!     "num_readings": 3,
//!     "dtype": "int8",
//!     "seed": 42
//! }"#).unwrap();
//!
//! assert_eq!(config.dtype, Dtype::Int8);
//! assert_eq!(config.reading_names, vec!["value_1", "value_2", "value_3"]);
//! ```

pub mod config;
pub mod dtype;
pub mod value;

// Re-exports for convenience
pub use config::{
    attributes_from_file, attributes_from_json, attributes_from_value, attributes_from_yaml,
    default_reading_names, ConfigError, GeneratorConfig, MAX_NUM_READINGS,
};
pub use dtype::Dtype;
pub use value::{int_to_value, serialize_int, serialize_ints, to_object, value_to_int};
