//! # ringcfg - Configuration generator for multicast ring agreement deployments
//!
//! This library turns a flat topology description, an ordered list of
//! `[hostname, datacenter]` pairs, into the addressed per-host configuration
//! document read at startup by a multicast/ring-based agreement engine.
//!
//! ## Overview
//!
//! The position of a host in the topology is its protocol identity. The
//! generator therefore never reorders hosts: record *i* of the output always
//! describes entry *i* of the input. Each record carries:
//!
//! - a shared multicast listen address (`0.0.0.0:<MCAST_LISTEN>`)
//! - per-host multicast reply and source addresses under `mcast.<hostname>`
//! - a point-to-point ring address
//! - a unicast address, for profiles that support direct channels
//!
//! Recovery-capable profiles append a `LEARNER` sentinel after every voting
//! host.
//!
//! ## Architecture
//!
//! - `topology`: metaconfig loading and validation
//! - `hosts`: well-known ports and host record generation
//! - `tuning`: per-profile tuning tables and deployment overrides
//! - `emitter`: document assembly and JSON serialization
//! - `orchestrator`: the end-to-end generator pipeline
//! - `resolver`: local host index lookup against a deployed configuration
//! - `utils`: duration parsing, map merging, deployment paths
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ringcfg::{emitter, orchestrator, tuning::Profile};
//! use std::path::Path;
//!
//! let document = orchestrator::generate_from_file(Path::new("metaconfig.json"), Profile::WithRecovery)?;
//! emitter::emit(&document, &mut std::io::stdout())?;
//! # Ok::<(), ringcfg::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`Error`], a `thiserror` enum covering load,
//! schema, lookup and resolution failures. The binaries wrap it with
//! `color_eyre` for reporting.

pub mod emitter;
pub mod error;
pub mod hosts;
pub mod orchestrator;
pub mod resolver;
pub mod topology;
pub mod tuning;
pub mod utils;

pub use error::{Error, Result};
