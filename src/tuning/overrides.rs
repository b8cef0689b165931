//! Deployment-specific tuning overrides.
//!
//! An overrides file is a JSON object mapping parameter names to integers or
//! strings. Overrides are applied after the profile's built-in layers, last
//! write wins. For integer knobs a string value is read as a duration
//! (`"250ms"`, `"2s"`) and stored in microseconds.

use crate::error::{Error, Result};
use crate::tuning::{TuningTable, TuningValue};
use crate::utils::{merge_options, parse_duration_to_micros};
use log::{info, warn};
use serde_json::Value;
use std::path::Path;

/// Key reserved for the generated host list.
const HOSTS_KEY: &str = "hosts";

/// Load an overrides file.
pub fn load_overrides(path: &Path) -> Result<TuningTable> {
    info!("Loading tuning overrides from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    parse_overrides(&value)
}

/// Validate an already-decoded overrides object.
pub fn parse_overrides(value: &Value) -> Result<TuningTable> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::Schema("tuning overrides must be a JSON object".to_string()))?;

    let mut overrides = TuningTable::new();
    for (key, value) in object {
        if key == HOSTS_KEY {
            return Err(Error::Schema(format!(
                "'{}' cannot be overridden; it is generated from the topology",
                HOSTS_KEY
            )));
        }

        let value = match value {
            Value::Number(n) => n.as_u64().map(TuningValue::Integer).ok_or_else(|| {
                Error::Schema(format!("override '{}': {} is not a non-negative integer", key, n))
            })?,
            Value::String(s) => TuningValue::Text(s.clone()),
            other => {
                return Err(Error::Schema(format!(
                    "override '{}': expected integer or string, found {}",
                    key, other
                )))
            }
        };
        overrides.insert(key.clone(), value);
    }

    Ok(overrides)
}

/// Layer overrides on top of a built-in tuning table.
///
/// String overrides of integer knobs are converted from durations; integer
/// overrides of string knobs are rejected. Keys the table does not know are
/// kept, with a warning.
pub fn apply_overrides(table: &TuningTable, overrides: &TuningTable) -> Result<TuningTable> {
    let mut normalized = TuningTable::new();

    for (key, value) in overrides {
        let value = match (table.get(key), value) {
            (Some(TuningValue::Integer(_)), TuningValue::Text(s)) => {
                let micros = parse_duration_to_micros(s)
                    .map_err(|e| Error::Schema(format!("override '{}': {}", key, e)))?;
                TuningValue::Integer(micros)
            }
            (Some(TuningValue::Text(current)), TuningValue::Integer(n)) => {
                return Err(Error::Schema(format!(
                    "override '{}': expected a string like '{}', found integer {}",
                    key, current, n
                )))
            }
            (None, _) => {
                warn!("Override '{}' is not a known tuning parameter for this profile", key);
                value.clone()
            }
            _ => value.clone(),
        };

        info!("Overriding {} = {}", key, value);
        normalized.insert(key.clone(), value);
    }

    Ok(merge_options(table, &normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::WellKnownPorts;
    use crate::tuning::{tuning_table, Profile};
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_overrides_last_write_wins() {
        let table = tuning_table(Profile::RingOnly, &WellKnownPorts::default());
        let overrides = parse_overrides(&json!({
            "ping_timeout": 1234,
            "ring_timeout": "250ms",
            "mcast_group": "239.9.9.9:23338",
        }))
        .unwrap();

        let merged = apply_overrides(&table, &overrides).unwrap();
        assert_eq!(merged["ping_timeout"], TuningValue::Integer(1234));
        assert_eq!(merged["ring_timeout"], TuningValue::Integer(250_000));
        assert_eq!(merged["mcast_group"], TuningValue::Text("239.9.9.9:23338".to_string()));
        assert_eq!(merged["ping_window"], TuningValue::Integer(100));
        assert_eq!(merged.len(), table.len());
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let table = tuning_table(Profile::RingOnly, &WellKnownPorts::default());
        let overrides = parse_overrides(&json!({"custom_knob": "7s"})).unwrap();

        let merged = apply_overrides(&table, &overrides).unwrap();
        assert_eq!(merged["custom_knob"], TuningValue::Text("7s".to_string()));
    }

    #[test]
    fn test_bad_duration_rejected() {
        let table = tuning_table(Profile::RingOnly, &WellKnownPorts::default());
        let overrides = parse_overrides(&json!({"ping_timeout": "soon"})).unwrap();

        let err = apply_overrides(&table, &overrides).unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_integer_override_of_string_knob_rejected() {
        let table = tuning_table(Profile::WithRecovery, &WellKnownPorts::default());

        for (key, value) in [("mcast_group", 5), ("master_value_port", 31000)] {
            let overrides = parse_overrides(&json!({ key: value })).unwrap();
            let err = apply_overrides(&table, &overrides).unwrap_err();
            assert!(err.is_schema(), "{} should keep its string type", key);
        }

        let overrides = parse_overrides(&json!({"master_value_port": "31000"})).unwrap();
        let merged = apply_overrides(&table, &overrides).unwrap();
        assert_eq!(merged["master_value_port"], TuningValue::Text("31000".to_string()));
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let cases = vec![
            json!([1, 2]),
            json!({"hosts": []}),
            json!({"ping_timeout": -5}),
            json!({"ping_timeout": 1.5}),
            json!({"ping_timeout": true}),
            json!({"ping_timeout": null}),
        ];

        for value in cases {
            let err = parse_overrides(&value).unwrap_err();
            assert!(err.is_schema(), "expected schema error for {}", value);
        }
    }

    #[test]
    fn test_load_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"phase2_interval": 32}}"#).unwrap();

        let overrides = load_overrides(temp_file.path()).unwrap();
        assert_eq!(overrides["phase2_interval"], TuningValue::Integer(32));

        let mut broken = NamedTempFile::new().unwrap();
        write!(broken, "{{").unwrap();
        assert!(load_overrides(broken.path()).unwrap_err().is_load());
    }
}
