//! Protocol tuning parameters.
//!
//! The agreement engine reads a flat set of timing and sizing knobs from the
//! configuration document. Each [`Profile`] selects the layers of knobs its
//! protocol generation understands; deployments may layer overrides on top.

pub mod overrides;
pub mod profile;
pub mod table;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use overrides::{apply_overrides, load_overrides};
pub use profile::Profile;
pub use table::{tuning_table, MCAST_GROUP_IP};

/// A single tuning value.
///
/// Most knobs are integers (microseconds unless the name says otherwise);
/// a few, such as the multicast group, are strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TuningValue {
    Integer(u64),
    Text(String),
}

impl From<u64> for TuningValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for TuningValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TuningValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for TuningValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Tuning parameters keyed by name, in stable (sorted) key order.
pub type TuningTable = BTreeMap<String, TuningValue>;
