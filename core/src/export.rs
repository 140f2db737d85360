//! Drivers that stream a catalog out as newline-delimited JSON.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::query::QueryLines;
use crate::record::{QueryRecord, RangeRecord};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    pub written: usize,
    pub skipped: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub queries: usize,
    pub matched: usize,
}

/// Writes every range in catalog order, one JSON object per line.
///
/// A record that fails to serialize is dropped with a warning and the export
/// carries on. Write failures end the export.
pub fn export_catalog<W: Write>(catalog: &Catalog, mut out: W) -> io::Result<ExportStats> {
    let mut stats = ExportStats::default();

    for range in catalog {
        let record = RangeRecord::from(range);
        if write_line(&mut out, &record)? {
            stats.written += 1;
        } else {
            warn!("Skipping {} {}: record could not be serialized", range.source, range.prefix());
            stats.skipped += 1;
        }
    }

    out.flush()?;
    debug!(written = stats.written, skipped = stats.skipped, "export finished");
    Ok(stats)
}

/// Answers each query line against the catalog.
///
/// Only hits are written. Misses, including lines that are not addresses at
/// all, produce no output.
pub fn lookup_stream<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: R,
    mut out: W,
) -> io::Result<LookupStats> {
    let mut stats = LookupStats::default();

    for line in QueryLines::new(input) {
        let line = line?;
        stats.queries += 1;

        let Some(entry) = catalog.lookup(&line) else {
            continue;
        };

        stats.matched += 1;
        if !write_line(&mut out, &QueryRecord::from(&entry))? {
            warn!("Skipping result for {line}: record could not be serialized");
        }
        // interactive callers expect each answer as soon as it is known
        out.flush()?;
    }

    debug!(queries = stats.queries, matched = stats.matched, "lookup finished");
    Ok(stats)
}

/// Serializes `value` followed by a newline. `Ok(false)` means the value
/// itself could not be encoded and nothing was written.
fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<bool> {
    let line = match serde_json::to_vec(value) {
        Ok(line) => line,
        Err(e) if e.is_io() => return Err(e.into()),
        Err(_) => return Ok(false),
    };

    out.write_all(&line)?;
    out.write_all(b"\n")?;
    Ok(true)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
