//! Reading and batch value types.

use randint_core::{int_to_value, serialize_ints, to_object};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// A single named integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub name: String,
    pub value: i128,
}

/// One full sample: a value per configured reading name, in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readings {
    readings: Vec<Reading>,
}

impl Readings {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: i128) {
        self.readings.push(Reading {
            name: name.to_string(),
            value,
        });
    }

    /// Get the value of a reading by name.
    pub fn get(&self, name: &str) -> Option<i128> {
        self.readings
            .iter()
            .find(|reading| reading.name == name)
            .map(|reading| reading.value)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterate readings in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// The values only, in configured order.
    pub fn values(&self) -> Vec<i128> {
        self.readings.iter().map(|reading| reading.value).collect()
    }

    /// Render as a name → number map, keeping configured order.
    pub fn to_map(&self) -> Map<String, Value> {
        to_object(self)
    }
}

impl Serialize for Readings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.readings.len()))?;
        for reading in &self.readings {
            map.serialize_entry(&reading.name, &int_to_value(reading.value))?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a Readings {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

/// Result of a `generate_batch` command.
///
/// The shape depends on how many readings the generator is configured for:
/// a single reading yields a flat list of integers, several readings yield a
/// list of name → value maps.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Batch {
    Single {
        #[serde(rename = "batch", serialize_with = "serialize_ints")]
        values: Vec<i128>,
        batch_size: usize,
        reading_name: String,
    },
    Multi {
        #[serde(rename = "batch")]
        rows: Vec<Readings>,
        batch_size: usize,
        reading_names: Vec<String>,
    },
}

impl Batch {
    pub(crate) fn single(reading_name: String, values: Vec<i128>) -> Self {
        Batch::Single {
            batch_size: values.len(),
            values,
            reading_name,
        }
    }

    pub(crate) fn multi(reading_names: Vec<String>, rows: Vec<Readings>) -> Self {
        Batch::Multi {
            batch_size: rows.len(),
            rows,
            reading_names,
        }
    }

    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        match self {
            Batch::Single { values, .. } => values.len(),
            Batch::Multi { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as the command response map.
    pub fn to_response(&self) -> Map<String, Value> {
        to_object(self)
    }
}
