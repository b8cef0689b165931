use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use ringcfg::emitter;
use ringcfg::orchestrator::{generate_configuration, GenerateOptions};
use ringcfg::tuning::Profile;

/// Generate the agreement engine configuration from a metaconfig topology
#[derive(Parser, Debug)]
#[command(name = "gen_config", author, version, about, long_about = None)]
struct Args {
    /// Path to the metaconfig JSON file ([[hostname, datacenter], ...])
    metaconfig: PathBuf,

    /// Protocol generation to generate for
    #[arg(short, long, value_enum, default_value_t = Profile::WithRecovery)]
    profile: Profile,

    /// JSON file of deployment-specific tuning overrides
    #[arg(long)]
    overrides: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Wrong arity is reported by clap, which exits non-zero before any I/O
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the document
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Metaconfig: {:?}", args.metaconfig);
    if let Some(path) = &args.overrides {
        info!("Overrides: {:?}", path);
    }

    let mut options = GenerateOptions::new(&args.metaconfig, args.profile);
    options.overrides = args.overrides.clone();

    let document = generate_configuration(&options)
        .wrap_err_with(|| format!("Failed to generate configuration from '{}'", args.metaconfig.display()))?;

    emitter::emit(&document, &mut std::io::stdout().lock()).wrap_err("Failed to write configuration")?;

    info!("Generated configuration for {} hosts", document.hosts().len());
    Ok(())
}
