//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title, description, url)        |
//! | `[build]`   | Profile document, output dir, RSS and sitemap  |
//! | `[serve]`   | Development server (interface, port)           |
//! | `[view]`    | List sizes (blog page size, badge previews)    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Jane Doe"
//! description = "Software engineer"
//! url = "https://jane.dev"
//!
//! [build]
//! data = "profile.json"
//! output = "public"
//!
//! [build.rss]
//! enable = true
//!
//! [view]
//! page_size = 6
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod serve;
mod view;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use serve::ServeConfig;
use view::ViewConfig;

pub use handle::{cfg, init_config};

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub view: ViewConfig,
}

impl SiteConfig {
    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Ok(Self::parse(&content, path)?)
    }

    /// Parse TOML read from `path`; the path only labels errors.
    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute site URL for a route path, if `[base] url` is set.
    pub fn absolute_url(&self, route_path: &str) -> Option<String> {
        let base = self.base.url.as_deref()?.trim_end_matches('/');
        Some(format!("{base}{route_path}"))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        self.update_path_with_root(cli, &root);

        match &cli.command {
            Commands::Build { render_args, clean } => {
                Self::update_option(&mut self.build.minify, render_args.minify.as_ref());
                self.build.clean |= *clean;
            }
            Commands::Serve {
                render_args,
                interface,
                port,
            } => {
                Self::update_option(&mut self.build.minify, render_args.minify.as_ref());
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                self.base.url = Some(format!(
                    "http://{}:{}",
                    self.serve.interface, self.serve.port
                ));
            }
            Commands::Init { .. } => {}
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root and make them absolute
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.build.data, cli.data.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::MissingConfig(self.config_path.clone()).into());
        }

        self.validate_fields()?;

        if !self.build.data.is_file() {
            return Err(ConfigError::MissingData(self.build.data.clone()).into());
        }

        Ok(())
    }

    /// Checks that need no filesystem access.
    fn validate_fields(&self) -> Result<(), ConfigError> {
        if self.view.page_size == 0 {
            return Err(ConfigError::PageSizeZero);
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(ConfigError::UrlScheme(base_url.clone()));
        }

        if self.build.rss.enable && self.base.url.is_none() {
            return Err(ConfigError::RssNeedsUrl);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
