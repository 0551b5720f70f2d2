//! Folio - a static site generator for a data-driven personal portfolio.

mod build;
mod cli;
mod config;
mod generator;
mod init;
mod profile;
mod render;
mod route;
mod serve;
mod utils;
mod view;

use anyhow::{Context, Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};
use init::new_site;
use profile::ProfileStore;
use serve::serve_site;
use std::{path::Path, sync::Arc};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    init_config(load_config(cli)?);
    let config = cfg();

    match &cli.command {
        Commands::Init { name } => new_site(&config, name.is_some()),
        Commands::Build { .. } => {
            let store = load_profile(&config)?;
            build_site(&config, &store).map(|_| ())
        }
        Commands::Serve { .. } => {
            let store = Arc::new(load_profile(&config)?);
            build_site(&config, &store)?;
            serve_site(store)
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}

/// Load the profile document once for the whole run.
fn load_profile(config: &SiteConfig) -> Result<ProfileStore> {
    let path = &config.build.data;
    let store = ProfileStore::load(path)
        .with_context(|| format!("Failed to load profile from {}", path.display()))?;

    let data = store.profile_data();
    log!(
        "load";
        "{}: {} posts, {} projects, {} timeline entries",
        path.file_name().unwrap_or_default().to_string_lossy(),
        data.blog.len(),
        data.projects.len(),
        store.timeline().len()
    );
    Ok(store)
}
