//! Configuration orchestrator.
//!
//! This module coordinates the generator pipeline: load the topology,
//! generate host records, build the profile's tuning table, apply overrides
//! and merge everything into one document.

use crate::emitter::{build_document, ConfigurationDocument};
use crate::error::Result;
use crate::hosts::{generate_hosts, WellKnownPorts};
use crate::topology::load_topology;
use crate::tuning::{apply_overrides, load_overrides, tuning_table, Profile};
use log::info;
use std::path::{Path, PathBuf};

/// Inputs of one generator run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub metaconfig: PathBuf,
    pub profile: Profile,
    pub overrides: Option<PathBuf>,
    pub ports: WellKnownPorts,
}

impl GenerateOptions {
    pub fn new(metaconfig: impl Into<PathBuf>, profile: Profile) -> Self {
        Self {
            metaconfig: metaconfig.into(),
            profile,
            overrides: None,
            ports: WellKnownPorts::default(),
        }
    }
}

/// Run the whole pipeline and return the finished document.
///
/// Every input is loaded and validated before the document exists, so a
/// failure anywhere means nothing is emitted.
pub fn generate_configuration(options: &GenerateOptions) -> Result<ConfigurationDocument> {
    info!("Generating configuration with profile {}", options.profile);

    let entries = load_topology(&options.metaconfig)?;
    let hosts = generate_hosts(&entries, options.profile, &options.ports);

    let mut tuning = tuning_table(options.profile, &options.ports);
    if let Some(path) = options.overrides.as_deref() {
        tuning = apply_overrides(&tuning, &load_overrides(path)?)?;
    }

    Ok(build_document(tuning, hosts))
}

/// Convenience wrapper using default ports and no overrides.
pub fn generate_from_file(metaconfig: &Path, profile: Profile) -> Result<ConfigurationDocument> {
    generate_configuration(&GenerateOptions::new(metaconfig, profile))
}
