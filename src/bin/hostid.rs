//! Print the local machine's index in the deployed host list.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use env_logger::Env;

use ringcfg::resolver::{resolve_host_index, StaticName, SystemResolver};
use ringcfg::utils::deployed_config_path;

#[derive(Parser, Debug)]
#[command(name = "hostid")]
#[command(about = "Resolve this machine's host index in the deployed configuration")]
#[command(version)]
struct Cli {
    /// Deployed configuration (default: ~/deploy/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Look up this hostname instead of resolving the local one
    #[arg(long)]
    hostname: Option<String>,

    /// Reverse lookup timeout in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match cli.config {
        Some(path) => path,
        None => deployed_config_path()?,
    };

    let index = match cli.hostname {
        Some(name) => resolve_host_index(&config, &StaticName(name)),
        None => resolve_host_index(&config, &SystemResolver::new(Duration::from_millis(cli.timeout_ms))),
    }
    .wrap_err_with(|| format!("Failed to resolve host index from '{}'", config.display()))?;

    println!("{}", index);
    Ok(())
}
