//! Configuration document assembly and serialization.
//!
//! The document is the tuning table with the generated host list under
//! `"hosts"`. Tuning keys are written in sorted order, followed by the host
//! list exactly as generated.

use crate::error::{Error, Result};
use crate::hosts::HostConfigRecord;
use crate::tuning::TuningTable;
use log::{debug, warn};
use serde::Serialize;
use std::io::Write;

const HOSTS_KEY: &str = "hosts";

/// The configuration document read by the agreement engine at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationDocument {
    #[serde(flatten)]
    tuning: TuningTable,
    hosts: Vec<HostConfigRecord>,
}

impl ConfigurationDocument {
    pub fn tuning(&self) -> &TuningTable {
        &self.tuning
    }

    /// Host records in ID order
    pub fn hosts(&self) -> &[HostConfigRecord] {
        &self.hosts
    }
}

/// Merge a tuning table and a generated host list into one document.
pub fn build_document(tuning: TuningTable, hosts: Vec<HostConfigRecord>) -> ConfigurationDocument {
    let mut tuning = tuning;
    if tuning.remove(HOSTS_KEY).is_some() {
        warn!("Ignoring tuning parameter '{}'; it is generated from the topology", HOSTS_KEY);
    }

    ConfigurationDocument { tuning, hosts }
}

/// Serialize a document as JSON indented by one space.
pub fn render(document: &ConfigurationDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer).map_err(Error::Serialize)?;

    // serde_json only ever emits valid UTF-8
    let mut text = String::from_utf8_lossy(&buf).into_owned();
    text.push('\n');
    Ok(text)
}

/// Write a document to `out`.
///
/// The full text is rendered before anything is written, so a serialization
/// failure leaves `out` untouched.
pub fn emit<W: Write>(document: &ConfigurationDocument, out: &mut W) -> Result<()> {
    let text = render(document)?;
    out.write_all(text.as_bytes()).map_err(Error::Write)?;
    out.flush().map_err(Error::Write)?;
    debug!("Emitted configuration document ({} bytes)", text.len());
    Ok(())
}
