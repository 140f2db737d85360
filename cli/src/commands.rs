pub mod export;
pub mod lookup;
pub mod region;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use cloudrange_common::Source;
use cloudrange_common::config::{Config, ManifestPaths};
use cloudrange_core::catalog::Catalog;
use cloudrange_core::store::FileStore;
use tracing::info;

#[derive(Parser)]
#[command(name = "cloudrange")]
#[command(about = "Normalize cloud provider IP range manifests and look up addresses.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the manifests under their default names
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Azure service tags manifest (default: <DIR>/azure-ranges.json)
    #[arg(long, global = true)]
    pub azure: Option<PathBuf>,

    /// Amazon ip-ranges manifest (default: <DIR>/aws-ranges.json)
    #[arg(long, global = true)]
    pub amazon: Option<PathBuf>,

    /// Google Cloud manifest (default: <DIR>/goog-ranges.json)
    #[arg(long, global = true)]
    pub google: Option<PathBuf>,

    /// Oracle Cloud manifest (default: <DIR>/oracle-ranges.json)
    #[arg(long, global = true)]
    pub oracle: Option<PathBuf>,

    /// Providers to load, in order. Earlier providers win on overlapping prefixes.
    #[arg(long, global = true, value_delimiter = ',', default_values_t = Source::ALL)]
    pub order: Vec<Source>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease log verbosity (-q warnings, -qq errors only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every range as newline-delimited JSON
    #[command(alias = "e")]
    Export,
    /// Find the range containing each address read from FILE or stdin
    #[command(alias = "l")]
    Lookup { input: Option<PathBuf> },
    /// Show the normalized tag for one or more region codes
    #[command(alias = "r")]
    Region {
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let mut manifests = ManifestPaths::in_dir(&self.dir);
        let overrides = [
            (Source::Azure, &self.azure),
            (Source::Amazon, &self.amazon),
            (Source::Google, &self.google),
            (Source::Oracle, &self.oracle),
        ];
        for (source, path) in overrides {
            if let Some(path) = path {
                manifests.set(source, path.clone());
            }
        }

        Config {
            manifests,
            order: self.order.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Loads every configured manifest from disk.
pub fn load_catalog(cfg: &Config) -> anyhow::Result<Catalog> {
    let store = FileStore::new(cfg.manifests.clone());
    let catalog = Catalog::load(&store, &cfg.order).context("failed to build the range catalog")?;

    for (source, count) in catalog.summary() {
        info!("{count} {source} ranges loaded");
    }

    Ok(catalog)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
