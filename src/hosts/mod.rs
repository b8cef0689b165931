//! Host configuration generation.
//!
//! Maps the ordered topology onto addressed per-host records. A record's
//! position in the generated list is the host's protocol ID; the ID is never
//! written into the record itself.

pub mod generator;
pub mod ports;

pub use generator::{generate_hosts, learner_record, HostConfigRecord};
pub use ports::{WellKnownPorts, WILDCARD_HOST};
