//! Shared utilities: duration parsing, tuning map merging, deployment paths.

pub mod deploy;
pub mod duration;
pub mod options;

pub use deploy::deployed_config_path;
pub use duration::parse_duration_to_micros;
pub use options::merge_options;
