use std::io::{self, BufWriter};

use anyhow::Context;
use cloudrange_common::config::Config;
use cloudrange_core::export::export_catalog;
use tracing::{info, warn};

use super::load_catalog;

pub fn export(cfg: &Config) -> anyhow::Result<()> {
    let catalog = load_catalog(cfg)?;

    let stdout = BufWriter::new(io::stdout().lock());
    let stats = export_catalog(&catalog, stdout).context("failed to write export")?;

    if stats.skipped > 0 {
        warn!("{} ranges could not be serialized and were skipped", stats.skipped);
    }
    info!("Exported {} ranges", stats.written);
    Ok(())
}
