//! Generator configuration.
//!
//! A [`GeneratorConfig`] is built from a raw attribute map, the same shape a
//! host platform hands to a component at construction:
//!
//! ```json
//! { "low": 0, "high": 100, "num_readings": 1,
//!   "reading_names": ["value"], "dtype": "int32", "seed": null }
//! ```
//!
//! Every attribute is optional. Invalid bounds, counts, dtypes and seeds are
//! rejected with [`ConfigError`]; a `reading_names` list whose length does not
//! match `num_readings` is replaced by synthesized names instead.
//!
//! Bounds that do not fit the configured dtype are rejected rather than
//! clamped.

use crate::dtype::Dtype;
use crate::value::{serialize_int, to_object, value_to_int};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default inclusive lower bound.
pub const DEFAULT_LOW: i128 = 0;

/// Default exclusive upper bound.
pub const DEFAULT_HIGH: i128 = 100;

/// Default number of readings per sample.
pub const DEFAULT_NUM_READINGS: usize = 1;

/// Upper limit on `num_readings`.
pub const MAX_NUM_READINGS: usize = 10_000;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level configuration was not a map
    #[error("Configuration must be a map of attributes, got {0}")]
    NotAnObject(String),

    /// Attribute has the wrong JSON type
    #[error("Attribute '{field}' must be {expected}, got {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// Unknown dtype name
    #[error("dtype must be one of [{supported}], got {dtype}")]
    UnsupportedDtype { dtype: String, supported: String },

    /// `high` is not strictly greater than `low`
    #[error("low ({low}) must be less than high ({high})")]
    InvalidBounds { low: i128, high: i128 },

    /// Bounds do not fit the dtype
    #[error("Bounds [{low}, {high}) do not fit dtype {dtype} (representable range [{min}, {max}])")]
    OutOfRange {
        dtype: Dtype,
        low: i128,
        high: i128,
        min: i128,
        max: i128,
    },

    /// `num_readings` outside `1..=MAX_NUM_READINGS`
    #[error("num_readings must be between 1 and 10000, got {0}")]
    InvalidNumReadings(i128),

    /// `reading_names` length differs from `num_readings`
    #[error("Expected {num_readings} reading names, got {names}")]
    NameCountMismatch { names: usize, num_readings: usize },

    /// Seed outside the unsigned 64-bit range
    #[error("seed must be a non-negative 64-bit integer, got {seed}")]
    InvalidSeed { seed: i128 },

    /// Two readings share a name
    #[error("Duplicate reading name: {0}")]
    DuplicateReadingName(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration for a reading generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    /// Inclusive lower bound
    #[serde(serialize_with = "serialize_int")]
    pub low: i128,
    /// Exclusive upper bound
    #[serde(serialize_with = "serialize_int")]
    pub high: i128,
    /// Number of readings produced per sample
    pub num_readings: usize,
    /// One name per reading, in output order
    pub reading_names: Vec<String>,
    /// Integer type the bounds must fit in
    pub dtype: Dtype,
    /// Deterministic seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            num_readings: DEFAULT_NUM_READINGS,
            reading_names: default_reading_names(DEFAULT_NUM_READINGS),
            dtype: Dtype::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_attributes(&attributes_from_file(path)?)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_attributes(&attributes_from_yaml(yaml)?)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_attributes(&attributes_from_json(json)?)
    }

    /// Build configuration from a raw attribute map.
    ///
    /// Applies defaults, validates bounds against the dtype, and repairs a
    /// mismatched `reading_names` list. Unknown keys are ignored.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self, ConfigError> {
        let dtype = match present(attributes, "dtype") {
            None => Dtype::default(),
            Some(Value::String(name)) => name.parse()?,
            Some(other) => return Err(invalid_type("dtype", "a string", other)),
        };

        let low = int_attribute(attributes, "low")?.unwrap_or(DEFAULT_LOW);
        let high = int_attribute(attributes, "high")?.unwrap_or(DEFAULT_HIGH);

        let num_readings = match int_attribute(attributes, "num_readings")? {
            None => DEFAULT_NUM_READINGS,
            Some(n) if n < 1 || n > MAX_NUM_READINGS as i128 => {
                return Err(ConfigError::InvalidNumReadings(n))
            }
            Some(n) => n as usize,
        };

        let reading_names = match names_attribute(attributes)? {
            Some(names) if names.len() == num_readings => names,
            Some(names) => {
                let repaired = default_reading_names(num_readings);
                warn!(
                    "Number of reading_names ({}) does not match num_readings ({}), using {:?}",
                    names.len(),
                    num_readings,
                    repaired
                );
                repaired
            }
            None => default_reading_names(num_readings),
        };

        let seed = match int_attribute(attributes, "seed")? {
            None => None,
            Some(seed) => {
                Some(u64::try_from(seed).map_err(|_| ConfigError::InvalidSeed { seed })?)
            }
        };

        let config = Self {
            low,
            high,
            num_readings,
            reading_names,
            dtype,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants of an already-built configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.high <= self.low {
            return Err(ConfigError::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        if !self.dtype.fits(self.low, self.high) {
            return Err(ConfigError::OutOfRange {
                dtype: self.dtype,
                low: self.low,
                high: self.high,
                min: self.dtype.min(),
                max: self.dtype.max(),
            });
        }
        if !(1..=MAX_NUM_READINGS).contains(&self.num_readings) {
            return Err(ConfigError::InvalidNumReadings(self.num_readings as i128));
        }
        if self.reading_names.len() != self.num_readings {
            return Err(ConfigError::NameCountMismatch {
                names: self.reading_names.len(),
                num_readings: self.num_readings,
            });
        }
        let mut seen = HashSet::new();
        for name in &self.reading_names {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateReadingName(name.clone()));
            }
        }
        Ok(())
    }

    /// Set the seed, returning the updated configuration.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Render the configuration as a plain attribute map.
    ///
    /// `seed` is `null` when none was set.
    pub fn to_attributes(&self) -> Map<String, Value> {
        to_object(self)
    }
}

/// Synthesize reading names for `count` readings.
///
/// A single reading is called `value`; multiple readings are numbered
/// `value_1` through `value_N`.
pub fn default_reading_names(count: usize) -> Vec<String> {
    if count == 1 {
        vec!["value".to_string()]
    } else {
        (1..=count).map(|i| format!("value_{i}")).collect()
    }
}

// ============================================================================
// Attribute loading
// ============================================================================

/// Read a raw attribute map from a file.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
pub fn attributes_from_file<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => attributes_from_json(&content),
        _ => attributes_from_yaml(&content),
    }
}

/// Parse a raw attribute map from YAML.
pub fn attributes_from_yaml(yaml: &str) -> Result<Map<String, Value>, ConfigError> {
    let value: Value = serde_yaml::from_str(yaml)?;
    attributes_from_value(value)
}

/// Parse a raw attribute map from JSON.
pub fn attributes_from_json(json: &str) -> Result<Map<String, Value>, ConfigError> {
    let value: Value = serde_json::from_str(json)?;
    attributes_from_value(value)
}

/// Unwrap a JSON value into an attribute map.
///
/// `null` (an empty document) is an empty map, which yields the defaults.
pub fn attributes_from_value(value: Value) -> Result<Map<String, Value>, ConfigError> {
    match value {
        Value::Object(attributes) => Ok(attributes),
        Value::Null => Ok(Map::new()),
        other => Err(ConfigError::NotAnObject(type_name(&other).to_string())),
    }
}

// ============================================================================
// Attribute helpers
// ============================================================================

/// Look up an attribute, treating `null` as absent.
fn present<'a>(attributes: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    attributes.get(field).filter(|value| !value.is_null())
}

fn int_attribute(attributes: &Map<String, Value>, field: &str) -> Result<Option<i128>, ConfigError> {
    match present(attributes, field) {
        None => Ok(None),
        Some(value) => value_to_int(value)
            .map(Some)
            .ok_or_else(|| invalid_type(field, "an integer", value)),
    }
}

fn names_attribute(attributes: &Map<String, Value>) -> Result<Option<Vec<String>>, ConfigError> {
    let items = match present(attributes, "reading_names") {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(invalid_type("reading_names", "a list of strings", other)),
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(name) => Ok(name.clone()),
            other => Err(invalid_type("reading_names", "a list of strings", other)),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn invalid_type(field: &str, expected: &'static str, found: &Value) -> ConfigError {
    ConfigError::InvalidType {
        field: field.to_string(),
        expected,
        found: found.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
