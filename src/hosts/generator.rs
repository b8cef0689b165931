//! Topology to host record mapping.

use crate::hosts::ports::{add_port, mcast_host, WellKnownPorts, WILDCARD_HOST};
use crate::topology::types::{TopologyEntry, LEARNER_DATACENTER, LEARNER_HOSTNAME};
use crate::tuning::Profile;
use log::debug;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Addressed configuration of one host.
///
/// Serialized as a flat JSON array in the order the engine expects:
/// `[hostname, datacenter, mcast_listen, mcast_reply, mcast_src, ring, unicast?]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfigRecord {
    pub hostname: String,
    pub datacenter: String,
    /// Shared by every host so they all join the same group
    pub mcast_listen_addr: String,
    pub mcast_reply_addr: String,
    pub mcast_src_addr: String,
    pub ring_addr: String,
    pub unicast_addr: Option<String>,
}

impl HostConfigRecord {
    /// Number of fields this record serializes to
    pub fn field_count(&self) -> usize {
        if self.unicast_addr.is_some() {
            7
        } else {
            6
        }
    }

    pub fn is_learner(&self) -> bool {
        self.hostname == LEARNER_HOSTNAME
    }

    /// Host part of the ring address
    pub fn ring_host(&self) -> &str {
        self.ring_addr
            .rsplit_once(':')
            .map_or(self.ring_addr.as_str(), |(host, _)| host)
    }
}

impl Serialize for HostConfigRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.field_count()))?;
        seq.serialize_element(&self.hostname)?;
        seq.serialize_element(&self.datacenter)?;
        seq.serialize_element(&self.mcast_listen_addr)?;
        seq.serialize_element(&self.mcast_reply_addr)?;
        seq.serialize_element(&self.mcast_src_addr)?;
        seq.serialize_element(&self.ring_addr)?;
        if let Some(unicast) = &self.unicast_addr {
            seq.serialize_element(unicast)?;
        }
        seq.end()
    }
}

fn host_record(entry: &TopologyEntry, profile: Profile, ports: &WellKnownPorts) -> HostConfigRecord {
    let mcast_name = mcast_host(&entry.hostname);

    HostConfigRecord {
        hostname: entry.hostname.clone(),
        datacenter: entry.datacenter.clone(),
        mcast_listen_addr: add_port(WILDCARD_HOST, ports.mcast_listen),
        mcast_reply_addr: add_port(&mcast_name, ports.mcast_reply),
        mcast_src_addr: add_port(&mcast_name, ports.mcast_src),
        ring_addr: add_port(&entry.hostname, ports.ring),
        unicast_addr: profile
            .has_unicast()
            .then(|| add_port(&entry.hostname, ports.ucast_listen)),
    }
}

/// The non-voting learner sentinel, bound entirely to wildcard addresses.
pub fn learner_record(profile: Profile, ports: &WellKnownPorts) -> HostConfigRecord {
    HostConfigRecord {
        hostname: LEARNER_HOSTNAME.to_string(),
        datacenter: LEARNER_DATACENTER.to_string(),
        mcast_listen_addr: add_port(WILDCARD_HOST, ports.mcast_listen),
        mcast_reply_addr: add_port(WILDCARD_HOST, ports.mcast_reply),
        mcast_src_addr: add_port(WILDCARD_HOST, ports.mcast_src),
        ring_addr: add_port(WILDCARD_HOST, ports.ring),
        unicast_addr: profile
            .has_unicast()
            .then(|| add_port(WILDCARD_HOST, ports.ucast_listen)),
    }
}

/// Generate the ordered host list for a topology.
///
/// Record *i* describes topology entry *i*. Profiles with a learner get
/// exactly one sentinel appended after every real host, so no voting host's
/// index moves.
pub fn generate_hosts(
    entries: &[TopologyEntry],
    profile: Profile,
    ports: &WellKnownPorts,
) -> Vec<HostConfigRecord> {
    let mut hosts: Vec<HostConfigRecord> = entries
        .iter()
        .map(|entry| host_record(entry, profile, ports))
        .collect();

    if profile.has_learner() {
        hosts.push(learner_record(profile, ports));
    }

    debug!("Generated {} host records for profile {}", hosts.len(), profile);
    hosts
}
