//! Integration tests for the host-facing sensor contract.
//!
//! These tests drive the sensor only through `new_sensor` and the `Sensor`
//! trait, the way a host platform would.

use randint_sensor::{new_sensor, validate_config, CommandError, ConfigError, Sensor};
use serde_json::{json, Map, Value};

/// Helper to turn a `json!` literal into an attribute or command map
fn map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected a JSON object, got {other}"),
    }
}

/// Helper to create the three-temperature sensor used across tests
fn temperature_sensor() -> Box<dyn Sensor> {
    new_sensor(
        "temps",
        &map(json!({
            "low": -40,
            "high": 100,
            "num_readings": 3,
            "reading_names": ["temp_cpu", "temp_gpu", "temp_ambient"],
            "dtype": "int8",
            "seed": 42
        })),
    )
    .unwrap()
}

fn value_in(value: &Value, low: i64, high: i64) -> bool {
    value.as_i64().is_some_and(|v| v >= low && v < high)
}

#[test]
fn test_readings_respect_count_and_bounds() {
    let configs = [
        json!({}),
        json!({ "low": 0, "high": 1 }),
        json!({ "low": -128, "high": 128, "dtype": "int8", "num_readings": 4 }),
        json!({ "low": 250, "high": 256, "dtype": "uint8", "num_readings": 2 }),
        json!({ "low": -5, "high": 5, "dtype": "int64", "num_readings": 10 }),
    ];

    for config in configs {
        let attributes = map(config.clone());
        let sensor = new_sensor("bounds", &attributes).unwrap();
        let low = attributes.get("low").and_then(Value::as_i64).unwrap_or(0);
        let high = attributes.get("high").and_then(Value::as_i64).unwrap_or(100);
        let count = attributes
            .get("num_readings")
            .and_then(Value::as_u64)
            .unwrap_or(1) as usize;

        for _ in 0..50 {
            let readings = sensor.readings();
            assert_eq!(readings.len(), count, "config {config}");
            for value in readings.values() {
                assert!(value_in(value, low, high), "{value} out of bounds for {config}");
            }
        }
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let a = temperature_sensor();
    let b = temperature_sensor();

    for _ in 0..10 {
        assert_eq!(a.readings(), b.readings());
    }

    let batch = map(json!({ "command": "generate_batch", "size": 5 }));
    assert_eq!(a.do_command(&batch).unwrap(), b.do_command(&batch).unwrap());
}

#[test]
fn test_example_batch_is_reproducible() {
    let batch = map(json!({ "command": "generate_batch", "size": 3 }));

    let first = temperature_sensor().do_command(&batch).unwrap();
    let second = temperature_sensor().do_command(&batch).unwrap();
    assert_eq!(first, second);

    assert_eq!(first["batch_size"], json!(3));
    assert_eq!(
        first["reading_names"],
        json!(["temp_cpu", "temp_gpu", "temp_ambient"])
    );
    let rows = first["batch"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for row in rows {
        let row = row.as_object().unwrap();
        assert_eq!(row.len(), 3);
        for name in ["temp_cpu", "temp_gpu", "temp_ambient"] {
            assert!(value_in(&row[name], -40, 100));
        }
    }
}

#[test]
fn test_reseed_with_construction_seed_replays() {
    let sensor = temperature_sensor();
    let original: Vec<_> = (0..5).map(|_| sensor.readings()).collect();

    let response = sensor
        .do_command(&map(json!({ "command": "reseed", "seed": 42 })))
        .unwrap();
    assert_eq!(Value::Object(response), json!({ "status": "reseeded", "seed": 42 }));

    let replayed: Vec<_> = (0..5).map(|_| sensor.readings()).collect();
    assert_eq!(original, replayed);
}

#[test]
fn test_reseed_with_new_seed_diverges() {
    let reference = temperature_sensor();
    let sensor = temperature_sensor();
    sensor
        .do_command(&map(json!({ "command": "reseed", "seed": 1234 })))
        .unwrap();

    let expected: Vec<_> = (0..10).map(|_| reference.readings()).collect();
    let actual: Vec<_> = (0..10).map(|_| sensor.readings()).collect();
    assert_ne!(expected, actual);

    let config = sensor
        .do_command(&map(json!({ "command": "get_config" })))
        .unwrap();
    assert_eq!(config["seed"], json!(1234));
}

#[test]
fn test_single_reading_batch() {
    let sensor = new_sensor("single", &map(json!({ "low": 10, "high": 20, "seed": 1 }))).unwrap();
    let response = sensor
        .do_command(&map(json!({ "command": "generate_batch", "size": 100 })))
        .unwrap();

    assert_eq!(response["batch_size"], json!(100));
    assert_eq!(response["reading_name"], json!("value"));
    let values = response["batch"].as_array().unwrap();
    assert_eq!(values.len(), 100);
    assert!(values.iter().all(|v| value_in(v, 10, 20)));
}

#[test]
fn test_name_mismatch_is_repaired() {
    let sensor = new_sensor(
        "repaired",
        &map(json!({ "num_readings": 3, "reading_names": ["only"] })),
    )
    .unwrap();

    let readings = sensor.readings();
    let names: Vec<_> = readings.keys().cloned().collect();
    assert_eq!(names, vec!["value_1", "value_2", "value_3"]);
}

#[test]
fn test_readings_keep_configured_order() {
    let sensor = temperature_sensor();
    let expected = vec!["temp_cpu", "temp_gpu", "temp_ambient"];

    let names: Vec<_> = sensor.readings().keys().cloned().collect();
    assert_eq!(names, expected);

    let response = sensor
        .do_command(&map(json!({ "command": "generate_batch", "size": 3 })))
        .unwrap();
    for row in response["batch"].as_array().unwrap() {
        let names: Vec<_> = row.as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, expected);
    }

    let config = sensor
        .do_command(&map(json!({ "command": "get_config" })))
        .unwrap();
    let keys: Vec<_> = config.keys().cloned().collect();
    assert_eq!(
        keys,
        vec!["low", "high", "num_readings", "reading_names", "dtype", "seed"]
    );
}

#[test]
fn test_oversized_requests_are_rejected() {
    let sensor = temperature_sensor();
    for size in [json!(100_001), json!(4_611_686_018_427_387_904_u64)] {
        let err = sensor
            .do_command(&map(json!({ "command": "generate_batch", "size": size })))
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidArgument(_)), "size {size}");
    }
    assert_eq!(sensor.readings().len(), 3);

    for num_readings in [json!(10_001), json!(4_611_686_018_427_387_904_u64)] {
        let attributes = map(json!({ "num_readings": num_readings }));
        assert!(matches!(
            new_sensor("huge", &attributes),
            Err(ConfigError::InvalidNumReadings(_))
        ));
        assert!(validate_config(&attributes).is_err());
    }
}

#[test]
fn test_get_config_without_seed() {
    let sensor = new_sensor("plain", &Map::new()).unwrap();
    let config = sensor
        .do_command(&map(json!({ "command": "get_config" })))
        .unwrap();
    assert_eq!(
        Value::Object(config),
        json!({
            "low": 0,
            "high": 100,
            "num_readings": 1,
            "reading_names": ["value"],
            "dtype": "int32",
            "seed": null
        })
    );
}

#[test]
fn test_unknown_command_is_an_error() {
    let sensor = temperature_sensor();
    let err = sensor
        .do_command(&map(json!({ "command": "nope" })))
        .unwrap_err();
    assert!(matches!(err, CommandError::UnsupportedCommand(_)));

    // The sensor keeps working afterwards
    assert_eq!(sensor.readings().len(), 3);
}

#[test]
fn test_bad_arguments_are_errors() {
    let sensor = temperature_sensor();
    for command in [
        json!({ "command": "reseed" }),
        json!({ "command": "reseed", "seed": "abc" }),
        json!({ "command": "generate_batch", "size": 0 }),
        json!({ "command": "generate_batch" }),
    ] {
        let err = sensor.do_command(&map(command.clone())).unwrap_err();
        assert!(
            matches!(err, CommandError::InvalidArgument(_)),
            "{command} should be an invalid argument"
        );
    }
}

#[test]
fn test_construction_errors() {
    let cases = [
        json!({ "low": 5, "high": 5 }),
        json!({ "dtype": "float32" }),
        json!({ "num_readings": 0 }),
        json!({ "low": -1, "dtype": "uint32" }),
        json!({ "high": 1000, "dtype": "int8" }),
    ];

    for case in cases {
        let attributes = map(case.clone());
        assert!(new_sensor("bad", &attributes).is_err(), "{case} should fail");
        assert!(validate_config(&attributes).is_err(), "{case} should fail");
    }
}

#[test]
fn test_reconfigure_through_trait() {
    let sensor = temperature_sensor();

    sensor
        .reconfigure(&map(json!({ "low": 7, "high": 8, "reading_names": ["constant"] })))
        .unwrap();
    assert_eq!(Value::Object(sensor.readings()), json!({ "constant": 7 }));

    let err = sensor
        .reconfigure(&map(json!({ "dtype": "int4" })))
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedDtype { .. }));
    assert_eq!(Value::Object(sensor.readings()), json!({ "constant": 7 }));
}

#[test]
fn test_uint64_full_range() {
    let attributes: Map<String, Value> = serde_json::from_str(
        r#"{"low": 0, "high": 18446744073709551616, "dtype": "uint64", "seed": 9}"#,
    )
    .unwrap();
    let sensor = new_sensor("wide", &attributes).unwrap();

    for _ in 0..20 {
        let readings = sensor.readings();
        assert!(readings["value"].as_u64().is_some());
    }
}
