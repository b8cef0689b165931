//! Host index resolution.
//!
//! Finds the position of the local machine in a deployed host list. The
//! local name is the canonical DNS name obtained by resolving the machine's
//! hostname to an address and reverse-resolving that address. Matching is
//! exact: aliases and partial names never match.

use crate::error::{Error, Result};
use crate::topology::LEARNER_HOSTNAME;
use log::{debug, info};
use serde_json::Value;
use std::net::IpAddr;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Default bound on the reverse lookup
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of the local machine's canonical hostname.
pub trait CanonicalName {
    fn canonical_hostname(&self) -> Result<String>;
}

/// A blocking canonical-name lookup.
pub type LookupFn = fn() -> Result<String>;

/// Resolves the canonical name through the system resolver.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
    lookup: LookupFn,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self::with_lookup(timeout, lookup_canonical_name)
    }

    /// Bound an arbitrary blocking lookup by `timeout`.
    pub fn with_lookup(timeout: Duration, lookup: LookupFn) -> Self {
        Self { timeout, lookup }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLVE_TIMEOUT)
    }
}

impl CanonicalName for SystemResolver {
    /// Runs the lookup on a worker thread and gives up after the timeout.
    /// A timed-out worker is left behind; it exits with the process.
    fn canonical_hostname(&self) -> Result<String> {
        let (tx, rx) = mpsc::channel();
        let lookup = self.lookup;
        thread::Builder::new()
            .name("reverse-lookup".to_string())
            .spawn(move || {
                // The receiver is gone if we already timed out
                let _ = tx.send(lookup());
            })
            .map_err(|e| Error::Resolution(format!("failed to start lookup thread: {}", e)))?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(Error::Resolution(format!(
                "lookup timed out after {:?}",
                self.timeout
            ))),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(Error::Resolution("lookup thread exited without a result".to_string()))
            }
        }
    }
}

/// A fixed name, for when the caller already knows which host it is.
#[derive(Debug, Clone)]
pub struct StaticName(pub String);

impl CanonicalName for StaticName {
    fn canonical_hostname(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

fn lookup_canonical_name() -> Result<String> {
    let hostname = dns_lookup::get_hostname()
        .map_err(|e| Error::Resolution(format!("cannot read local hostname: {}", e)))?;
    debug!("Local hostname: {}", hostname);

    let addrs = dns_lookup::lookup_host(&hostname)
        .map_err(|e| Error::Resolution(format!("cannot resolve '{}': {}", hostname, e)))?;
    let addr: IpAddr = addrs
        .into_iter()
        .next()
        .ok_or_else(|| Error::Resolution(format!("'{}' resolved to no addresses", hostname)))?;
    debug!("Local address: {}", addr);

    let canonical = dns_lookup::lookup_addr(&addr)
        .map_err(|e| Error::Resolution(format!("reverse lookup of {} failed: {}", addr, e)))?;
    info!("Canonical hostname: {}", canonical);
    Ok(canonical)
}

/// Read the hostnames of a deployed configuration, in ID order.
///
/// Accepts either a configuration document (an object with `hosts`) or a
/// bare metaconfig topology (`[[hostname, datacenter], ...]`). The learner
/// sentinel is kept so indices line up with the engine's view.
pub fn load_hostnames(path: &Path) -> Result<Vec<String>> {
    info!("Reading deployed configuration from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    hostnames_from_value(&value)
}

/// Extract hostnames from an already-decoded deployed configuration.
pub fn hostnames_from_value(value: &Value) -> Result<Vec<String>> {
    let hosts = match value {
        Value::Object(map) => map
            .get("hosts")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Schema("configuration has no 'hosts' array".to_string()))?,
        Value::Array(entries) => entries,
        _ => {
            return Err(Error::Schema(
                "configuration must be an object with 'hosts' or a topology array".to_string(),
            ))
        }
    };

    hosts
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .get(0)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| Error::Schema(format!("hosts[{}]: first field must be a hostname string", index)))
        })
        .collect()
}

/// Zero-based position of `canonical` in `hostnames`.
pub fn host_index(hostnames: &[String], canonical: &str) -> Result<usize> {
    if canonical == LEARNER_HOSTNAME {
        return Err(Error::NotFound {
            hostname: canonical.to_string(),
        });
    }

    hostnames
        .iter()
        .position(|h| h == canonical)
        .ok_or_else(|| Error::NotFound {
            hostname: canonical.to_string(),
        })
}

/// Resolve the local host's index in the configuration at `path`.
pub fn resolve_host_index<R: CanonicalName>(path: &Path, resolver: &R) -> Result<usize> {
    let hostnames = load_hostnames(path)?;
    let canonical = resolver.canonical_hostname()?;
    let index = host_index(&hostnames, &canonical)?;
    info!("{} is host {}", canonical, index);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_index() {
        let hostnames = names(&["a.example.com", "b.example.com", "c.example.com"]);
        assert_eq!(host_index(&hostnames, "c.example.com").unwrap(), 2);
        assert_eq!(host_index(&hostnames, "a.example.com").unwrap(), 0);
    }

    #[test]
    fn test_no_alias_or_partial_match() {
        let hostnames = names(&["a.example.com", "b.example.com"]);
        for candidate in ["a", "A.example.com", "a.example.com.", "example.com", ""] {
            let err = host_index(&hostnames, candidate).unwrap_err();
            assert!(err.is_not_found(), "{} should not match", candidate);
        }
    }

    #[test]
    fn test_learner_never_matches() {
        let hostnames = names(&["a.example.com", "LEARNER"]);
        assert!(host_index(&hostnames, "LEARNER").unwrap_err().is_not_found());
    }

    #[test]
    fn test_hostnames_from_document_and_topology() {
        let document = json!({
            "ping_timeout": 30000,
            "hosts": [
                ["a.example.com", "dc1", "0.0.0.0:23338"],
                ["b.example.com", "dc1", "0.0.0.0:23338"],
                ["LEARNER", "ANY", "0.0.0.0:23338"]
            ]
        });
        assert_eq!(
            hostnames_from_value(&document).unwrap(),
            names(&["a.example.com", "b.example.com", "LEARNER"])
        );

        let topology = json!([["x.example.com", "dc1"], ["y.example.com", "dc2"]]);
        assert_eq!(
            hostnames_from_value(&topology).unwrap(),
            names(&["x.example.com", "y.example.com"])
        );
    }

    #[test]
    fn test_malformed_documents_rejected() {
        for value in [json!({"ping_timeout": 1}), json!({"hosts": [[1, "dc1"]]}), json!("hosts"), json!({"hosts": [[]]})] {
            assert!(hostnames_from_value(&value).unwrap_err().is_schema());
        }
    }

    #[test]
    fn test_slow_lookup_times_out() {
        fn slow_lookup() -> Result<String> {
            thread::sleep(Duration::from_secs(2));
            Ok("a.example.com".to_string())
        }

        let resolver = SystemResolver::with_lookup(Duration::from_millis(50), slow_lookup);
        let err = resolver.canonical_hostname().unwrap_err();
        assert!(err.is_resolution());
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_failed_lookup_is_resolution_error() {
        fn failing_lookup() -> Result<String> {
            Err(Error::Resolution("no PTR record".to_string()))
        }

        let resolver = SystemResolver::with_lookup(Duration::from_secs(5), failing_lookup);
        let err = resolver.canonical_hostname().unwrap_err();
        assert!(err.is_resolution());
        assert!(err.to_string().contains("no PTR record"));
    }

    #[test]
    fn test_fast_lookup_returns_name() {
        fn fixed_lookup() -> Result<String> {
            Ok("b.example.com".to_string())
        }

        let resolver = SystemResolver::with_lookup(Duration::from_secs(5), fixed_lookup);
        assert_eq!(resolver.canonical_hostname().unwrap(), "b.example.com");
    }

    #[test]
    fn test_static_name() {
        let resolver = StaticName("b.example.com".to_string());
        assert_eq!(resolver.canonical_hostname().unwrap(), "b.example.com");
    }
}
