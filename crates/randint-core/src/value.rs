//! Conversions between JSON numbers and wide integers.
//!
//! Hosts frequently encode every number as a double (protobuf `Struct`),
//! so integral floats such as `42.0` are accepted wherever an integer is
//! expected.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Largest magnitude an `f64` may have and still be converted.
const F64_INT_LIMIT: f64 = 1.7e38;

/// Interpret a JSON value as an integer.
///
/// Returns `None` for non-numbers and for floats with a fractional part.
pub fn value_to_int(value: &Value) -> Option<i128> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(i) = number.as_i64() {
        return Some(i as i128);
    }
    if let Some(u) = number.as_u64() {
        return Some(u as i128);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < F64_INT_LIMIT)
        .map(|f| f as i128)
}

/// Encode an integer as a JSON number.
///
/// Anything within the `i64`/`u64` range is exact. Values beyond that never
/// come out of the generator, and fall back to a float.
pub fn int_to_value(value: i128) -> Value {
    if let Ok(i) = i64::try_from(value) {
        Value::from(i)
    } else if let Ok(u) = u64::try_from(value) {
        Value::from(u)
    } else {
        Value::from(value as f64)
    }
}

/// `serialize_with` helper writing an `i128` as a plain JSON number.
pub fn serialize_int<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
    int_to_value(*value).serialize(serializer)
}

/// `serialize_with` helper for a list of `i128`.
pub fn serialize_ints<S: Serializer>(values: &[i128], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().copied().map(int_to_value))
}

/// Serialize a value that is known to render as a JSON map.
///
/// Anything that does not render as a map yields an empty map.
pub fn to_object<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
