use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use cloudrange_common::config::Config;
use cloudrange_core::export::lookup_stream;
use tracing::info;

use super::load_catalog;

/// Answers queries from `input`, or from stdin when no file is given.
pub fn lookup(input: Option<PathBuf>, cfg: &Config) -> anyhow::Result<()> {
    let catalog = load_catalog(cfg)?;
    let stdout = io::stdout().lock();

    let stats = match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open query file {}", path.display()))?;
            lookup_stream(&catalog, BufReader::new(file), stdout)
        }
        None => lookup_stream(&catalog, io::stdin().lock(), stdout),
    }
    .context("lookup failed")?;

    info!("{} of {} queries matched", stats.matched, stats.queries);
    Ok(())
}
