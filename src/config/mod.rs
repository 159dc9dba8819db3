//! CLI-side configuration: where sensor attributes come from and how
//! sampling intervals are written.

pub mod duration;

pub use duration::parse_interval;

use clap::Args;
use randint_core::{attributes_from_file, attributes_from_json};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Options for building a sensor from the command line.
#[derive(Args, Clone, Debug)]
pub struct SensorOpts {
    /// Resource name of the sensor
    #[arg(long, default_value = "randint", env = "RANDINT_SENSOR_NAME")]
    pub name: String,

    /// Path to a YAML or JSON attribute file
    #[arg(long, short = 'c', value_name = "PATH", conflicts_with = "attributes")]
    pub config: Option<PathBuf>,

    /// Inline JSON attribute map (e.g. '{"low": 0, "high": 10}')
    #[arg(long, value_name = "JSON")]
    pub attributes: Option<String>,
}

impl SensorOpts {
    /// Load the raw attribute map.
    ///
    /// With neither `--config` nor `--attributes`, the map is empty and the
    /// sensor uses its defaults.
    pub fn load_attributes(&self) -> anyhow::Result<Map<String, Value>> {
        use anyhow::Context;

        if let Some(path) = &self.config {
            return attributes_from_file(path)
                .with_context(|| format!("Failed to load sensor attributes from {path:?}"));
        }
        if let Some(json) = &self.attributes {
            return attributes_from_json(json).context("Failed to parse --attributes");
        }
        Ok(Map::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(config: Option<PathBuf>, attributes: Option<&str>) -> SensorOpts {
        SensorOpts {
            name: "randint".to_string(),
            config,
            attributes: attributes.map(str::to_string),
        }
    }

    #[test]
    fn test_no_source_is_empty() {
        assert!(opts(None, None).load_attributes().unwrap().is_empty());
    }

    #[test]
    fn test_inline_attributes() {
        let attributes = opts(None, Some(r#"{"low": 3, "seed": 1}"#))
            .load_attributes()
            .unwrap();
        assert_eq!(attributes.get("low"), Some(&Value::from(3)));
    }

    #[test]
    fn test_inline_attributes_must_be_map() {
        assert!(opts(None, Some("[1]")).load_attributes().is_err());
    }

    #[test]
    fn test_attribute_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensor.yaml");
        std::fs::write(&path, "high: 7\ndtype: uint8\n").unwrap();

        let attributes = opts(Some(path), None).load_attributes().unwrap();
        assert_eq!(attributes.get("dtype"), Some(&Value::from("uint8")));
    }

    #[test]
    fn test_missing_file() {
        let err = opts(Some(PathBuf::from("/nonexistent.yaml")), None)
            .load_attributes()
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load sensor attributes"));
    }
}
