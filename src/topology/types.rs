//! Topology type definitions.
//!
//! The position of an entry in the topology is the host's protocol identity,
//! so these types are always handled as ordered sequences.

use serde::{Deserialize, Serialize};

/// Hostname reserved for the non-voting learner sentinel.
pub const LEARNER_HOSTNAME: &str = "LEARNER";

/// Datacenter label carried by the learner sentinel.
pub const LEARNER_DATACENTER: &str = "ANY";

/// One `[hostname, datacenter]` pair from the metaconfig file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct TopologyEntry {
    pub hostname: String,
    pub datacenter: String,
}

impl TopologyEntry {
    pub fn new(hostname: impl Into<String>, datacenter: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            datacenter: datacenter.into(),
        }
    }
}

impl From<(String, String)> for TopologyEntry {
    fn from((hostname, datacenter): (String, String)) -> Self {
        Self { hostname, datacenter }
    }
}

impl From<TopologyEntry> for (String, String) {
    fn from(entry: TopologyEntry) -> Self {
        (entry.hostname, entry.datacenter)
    }
}
