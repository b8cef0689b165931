//! Metaconfig loading and validation.

use crate::error::{Error, Result};
use crate::topology::types::{TopologyEntry, LEARNER_HOSTNAME};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Load and validate the topology from a metaconfig JSON file.
///
/// The file must hold an array of `[hostname, datacenter]` string pairs.
/// Entry order is preserved exactly: it becomes the host ID space.
///
/// # Errors
/// * `Error::Read` / `Error::Parse` if the file cannot be read or is not JSON
/// * `Error::Schema` if any entry is malformed or a hostname repeats
pub fn load_topology(path: &Path) -> Result<Vec<TopologyEntry>> {
    info!("Loading topology from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_topology(&value)?;
    info!("Loaded {} hosts from topology", entries.len());
    Ok(entries)
}

/// Validate an already-decoded metaconfig value.
pub fn parse_topology(value: &Value) -> Result<Vec<TopologyEntry>> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::Schema("topology must be a JSON array of [hostname, datacenter] pairs".to_string()))?;

    if items.is_empty() {
        return Err(Error::Schema("topology contains no hosts".to_string()));
    }

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let entry = parse_entry(index, item)?;

        if entry.hostname.trim().is_empty() {
            return Err(Error::Schema(format!("entry {}: hostname cannot be empty", index)));
        }
        if entry.hostname.chars().any(char::is_whitespace) {
            return Err(Error::Schema(format!(
                "entry {}: hostname '{}' contains whitespace",
                index, entry.hostname
            )));
        }
        if entry.hostname == LEARNER_HOSTNAME {
            return Err(Error::Schema(format!(
                "entry {}: hostname '{}' is reserved for the learner role",
                index, LEARNER_HOSTNAME
            )));
        }
        if !seen.insert(entry.hostname.clone()) {
            return Err(Error::Schema(format!(
                "entry {}: duplicate hostname '{}'",
                index, entry.hostname
            )));
        }

        debug!("Host {}: {} ({})", index, entry.hostname, entry.datacenter);
        entries.push(entry);
    }

    Ok(entries)
}

fn parse_entry(index: usize, item: &Value) -> Result<TopologyEntry> {
    match item.as_array().map(Vec::as_slice) {
        Some([Value::String(hostname), Value::String(datacenter)]) => {
            Ok(TopologyEntry::new(hostname.as_str(), datacenter.as_str()))
        }
        _ => Err(Error::Schema(format!(
            "entry {}: expected [hostname, datacenter] string pair, found {}",
            index, item
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_preserves_order() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"[["c.example.com", "dc2"], ["a.example.com", "dc1"], ["b.example.com", "dc1"]]"#
        )
        .unwrap();

        let entries = load_topology(temp_file.path()).unwrap();
        let hostnames: Vec<&str> = entries.iter().map(|e| e.hostname.as_str()).collect();
        assert_eq!(hostnames, vec!["c.example.com", "a.example.com", "b.example.com"]);
        assert_eq!(entries[0].datacenter, "dc2");
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_topology(Path::new("/nonexistent/metaconfig.json")).unwrap_err();
        assert!(err.is_load());
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"[["a.example.com", "dc1"]"#).unwrap();

        let err = load_topology(temp_file.path()).unwrap_err();
        assert!(err.is_load());
    }

    #[test]
    fn test_duplicate_hostname_rejected() {
        let value = json!([["a.example.com", "dc1"], ["a.example.com", "dc2"]]);
        let err = parse_topology(&value).unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("duplicate hostname 'a.example.com'"));
    }

    #[test]
    fn test_whitespace_hostname_rejected() {
        let value = json!([["a.example.com", "dc1"], ["b example.com", "dc1"]]);
        let err = parse_topology(&value).unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("entry 1"));
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn test_malformed_entries_rejected() {
        let cases = vec![
            json!({"hosts": []}),
            json!([]),
            json!([["a.example.com"]]),
            json!([["a.example.com", "dc1", "extra"]]),
            json!([["a.example.com", 1]]),
            json!(["a.example.com"]),
            json!([["", "dc1"]]),
            json!([[" ", "dc1"]]),
            json!([["\t", "dc1"]]),
            json!([["a b.example.com", "dc1"]]),
            json!([[" a.example.com", "dc1"]]),
            json!([["LEARNER", "ANY"]]),
        ];

        for value in cases {
            let err = parse_topology(&value).unwrap_err();
            assert!(err.is_schema(), "expected schema error for {}", value);
        }
    }
}
