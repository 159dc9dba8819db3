//! Integer data types supported by the generator.

use crate::config::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Integer width and signedness of the generated readings.
///
/// The dtype defines the representable range that `low` and `high`
/// must fit in. Values are always sampled in the native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    Int8,
    Int16,
    #[default]
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
}

impl Dtype {
    /// Every supported dtype, in declaration order.
    pub const ALL: [Dtype; 8] = [
        Dtype::Int8,
        Dtype::Int16,
        Dtype::Int32,
        Dtype::Int64,
        Dtype::Uint8,
        Dtype::Uint16,
        Dtype::Uint32,
        Dtype::Uint64,
    ];

    /// The lowercase name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dtype::Int8 => "int8",
            Dtype::Int16 => "int16",
            Dtype::Int32 => "int32",
            Dtype::Int64 => "int64",
            Dtype::Uint8 => "uint8",
            Dtype::Uint16 => "uint16",
            Dtype::Uint32 => "uint32",
            Dtype::Uint64 => "uint64",
        }
    }

    /// Smallest representable value.
    pub fn min(&self) -> i128 {
        match self {
            Dtype::Int8 => i8::MIN as i128,
            Dtype::Int16 => i16::MIN as i128,
            Dtype::Int32 => i32::MIN as i128,
            Dtype::Int64 => i64::MIN as i128,
            Dtype::Uint8 | Dtype::Uint16 | Dtype::Uint32 | Dtype::Uint64 => 0,
        }
    }

    /// Largest representable value.
    pub fn max(&self) -> i128 {
        match self {
            Dtype::Int8 => i8::MAX as i128,
            Dtype::Int16 => i16::MAX as i128,
            Dtype::Int32 => i32::MAX as i128,
            Dtype::Int64 => i64::MAX as i128,
            Dtype::Uint8 => u8::MAX as i128,
            Dtype::Uint16 => u16::MAX as i128,
            Dtype::Uint32 => u32::MAX as i128,
            Dtype::Uint64 => u64::MAX as i128,
        }
    }

    /// Whether the half-open range `[low, high)` fits in this dtype.
    ///
    /// `high` is exclusive, so it may be one past [`Dtype::max`].
    pub fn fits(&self, low: i128, high: i128) -> bool {
        low >= self.min() && high <= self.max() + 1
    }

    fn names() -> String {
        Self::ALL
            .iter()
            .map(Dtype::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dtype {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dtype| dtype.as_str() == s)
            .ok_or_else(|| ConfigError::UnsupportedDtype {
                dtype: s.to_string(),
                supported: Self::names(),
            })
    }
}
