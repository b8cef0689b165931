//! Topology module.
//!
//! This module contains the input side of the generator: the ordered list
//! of participating hosts and their datacenter labels, and the loader that
//! reads and validates it from a metaconfig file.

pub mod types;
pub mod loader;

// Re-export key types and functions for easier access
pub use types::{TopologyEntry, LEARNER_HOSTNAME};
pub use loader::{load_topology, parse_topology};
