//! Deployment directory conventions.
//!
//! Deployed configurations live under `~/deploy/`, where the agreement
//! engine and the `hostid` tool both expect to find them.

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Deployment directory relative to the user's home directory
const DEPLOY_DIR: &str = "deploy";

/// File name of the deployed configuration document
const DEPLOYED_CONFIG_FILE: &str = "config.json";

/// Get the user's home directory from the HOME environment variable
fn get_home_dir() -> Result<PathBuf> {
    env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| Error::NoHomeDir)
}

/// Path of the deployed configuration document (`$HOME/deploy/config.json`).
pub fn deployed_config_path() -> Result<PathBuf> {
    Ok(get_home_dir()?.join(DEPLOY_DIR).join(DEPLOYED_CONFIG_FILE))
}
