//! Error types shared by the generator and the host index resolver.

use std::path::PathBuf;

/// Errors produced while loading topologies, building documents or
/// resolving the local host index.
///
/// Usage errors never reach this type: the CLI parser reports them and
/// exits before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path} as JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid schema: {0}")]
    Schema(String),

    #[error("Hostname '{hostname}' not found in deployed host list")]
    NotFound { hostname: String },

    #[error("Reverse name resolution failed: {0}")]
    Resolution(String),

    #[error("Cannot determine home directory")]
    NoHomeDir,

    #[error("Failed to serialize configuration document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write configuration document: {0}")]
    Write(#[source] std::io::Error),
}

impl Error {
    /// True for failures to open or decode an input file.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
