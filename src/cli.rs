//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Profile document path (relative to project root)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared rendering arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a starter site with a sample profile
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Render every route into the output directory
    Build {
        #[command(flatten)]
        render_args: RenderArgs,

        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,
    },

    /// Serve the site, rendering each request from the profile
    Serve {
        #[command(flatten)]
        render_args: RenderArgs,

        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["folio", "build", "--clean", "--minify", "false"]).unwrap();
        assert!(matches!(cli.command, Commands::Build { .. }));
        match cli.command {
            Commands::Build { render_args, clean } => {
                assert!(clean);
                assert_eq!(render_args.minify, Some(false));
            }
            _ => unreachable!(),
        }
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_parse_serve_with_globals() {
        let cli = Cli::try_parse_from([
            "folio", "--root", "site", "--data", "me.json", "serve", "--port", "8080",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Serve { .. }));
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.data, Some(PathBuf::from("me.json")));
        match cli.command {
            Commands::Serve { port, interface, render_args } => {
                assert_eq!(port, Some(8080));
                assert_eq!(interface, None);
                assert_eq!(render_args.minify, None);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_init_name() {
        let cli = Cli::try_parse_from(["folio", "init", "my-site"]).unwrap();
        assert!(cli.is_init());
        assert!(matches!(cli.command, Commands::Init { name: Some(ref n) } if n == &PathBuf::from("my-site")));
    }
}
