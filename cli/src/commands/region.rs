use std::io::{self, Write};

use cloudrange_common::region;
use serde_json::json;
use tracing::debug;

/// Prints `{"Region", "RegionNorm"}` for each code, one per line.
pub fn region(codes: &[String]) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    for code in codes {
        debug!(code = %code, mapped = region::is_mapped(code), "normalizing region");
        let line = json!({ "Region": code, "RegionNorm": region::normalize(code) });
        writeln!(stdout, "{line}")?;
    }

    Ok(())
}
