//! Site initialization module.
//!
//! Creates a starter project: `folio.toml`, a sample `profile.json` and
//! ignore files for the build output.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Sample profile written by `folio init` (embedded at compile time)
const SAMPLE_PROFILE: &str = include_str!("embed/init/profile.json");

/// Create a new site with the default config and sample profile.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <SITE_NAME>` to create in a subdirectory."
        );
    }

    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    init_default_config(config)?;
    init_sample_profile(&config.build.data)?;
    init_ignored_files(root, &[Path::new(default_output_name(config))])?;

    log!("init"; "created site in {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file, titled after the site directory.
fn init_default_config(config: &SiteConfig) -> Result<()> {
    let mut default = SiteConfig::default();
    if let Some(name) = config.get_root().file_name() {
        default.base.title = name.to_string_lossy().into_owned();
    }

    let content = toml::to_string_pretty(&default)?;
    write_new(&config.config_path, &content)
}

fn init_sample_profile(path: &Path) -> Result<()> {
    write_new(path, SAMPLE_PROFILE)
}

/// Output directory as written in the ignore files.
fn default_output_name(config: &SiteConfig) -> &str {
    config
        .build
        .output
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("public")
}

/// Write a file that must not exist yet.
fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        bail!(
            "Path `{}` already exists. Try `folio init <SITE_NAME>` instead.",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Initialize .gitignore and .ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
