//! Host-facing sensor contract.
//!
//! A host platform discovers this component by its [`MODEL`] identifier,
//! checks its attributes with [`validate_config`], and builds it through
//! [`new_sensor`]. After that it only ever talks to the [`Sensor`] trait.

use randint_core::{ConfigError, GeneratorConfig};
use randint_generator::{CommandError, ReadingGenerator};
use serde_json::{Map, Value};
use std::fmt;

/// Model triple identifying a component implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Model {
    pub namespace: &'static str,
    pub family: &'static str,
    pub name: &'static str,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.family, self.name)
    }
}

/// The model this crate implements.
pub const MODEL: Model = Model {
    namespace: "hunter",
    family: "randint-generator",
    name: "sensor",
};

/// A physical shape attached to a sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub label: String,
}

/// Operations a host may call on a sensor.
pub trait Sensor: Send + Sync {
    /// Resource name given at construction.
    fn name(&self) -> &str;

    /// Produce one sample as a name → value map.
    fn readings(&self) -> Map<String, Value>;

    /// Execute an administrative command.
    fn do_command(&self, command: &Map<String, Value>) -> Result<Map<String, Value>, CommandError>;

    /// Apply new attributes to the live sensor.
    fn reconfigure(&self, attributes: &Map<String, Value>) -> Result<(), ConfigError>;

    /// Physical geometries; virtual sensors have none.
    fn geometries(&self) -> Vec<Geometry> {
        Vec::new()
    }
}

impl Sensor for ReadingGenerator {
    fn name(&self) -> &str {
        ReadingGenerator::name(self)
    }

    fn readings(&self) -> Map<String, Value> {
        self.get_readings().to_map()
    }

    fn do_command(&self, command: &Map<String, Value>) -> Result<Map<String, Value>, CommandError> {
        ReadingGenerator::do_command(self, command)
    }

    fn reconfigure(&self, attributes: &Map<String, Value>) -> Result<(), ConfigError> {
        ReadingGenerator::reconfigure(self, attributes)
    }
}

/// Validate attributes without building a sensor.
///
/// Returns the names of required dependencies, of which there are none.
pub fn validate_config(attributes: &Map<String, Value>) -> Result<Vec<String>, ConfigError> {
    GeneratorConfig::from_attributes(attributes)?;
    Ok(Vec::new())
}

/// Build a sensor from its resource name and raw attributes.
pub fn new_sensor(
    name: &str,
    attributes: &Map<String, Value>,
) -> Result<Box<dyn Sensor>, ConfigError> {
    Ok(Box::new(ReadingGenerator::from_attributes(name, attributes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_display() {
        assert_eq!(MODEL.to_string(), "hunter:randint-generator:sensor");
    }

    #[test]
    fn test_validate_config() {
        let ok = json!({ "low": 1, "high": 2 });
        assert!(validate_config(ok.as_object().unwrap()).unwrap().is_empty());

        let bad = json!({ "dtype": "int128" });
        assert!(validate_config(bad.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_new_sensor_through_trait() {
        let attributes = json!({ "reading_names": ["rpm"], "seed": 4 });
        let sensor = new_sensor("fan", attributes.as_object().unwrap()).unwrap();

        assert_eq!(sensor.name(), "fan");
        assert!(sensor.geometries().is_empty());

        let readings = sensor.readings();
        assert_eq!(readings.len(), 1);
        assert!(readings.contains_key("rpm"));
    }
}
