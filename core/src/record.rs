//! # Export Records
//!
//! The flat JSON shapes written to stdout, one object per line.

use cloudrange_common::{Range, RangeEntry, Source};
use serde::Serialize;

/// A range as exported:
/// `{"Source", "Service", "Region", "RegionNorm", "Prefix", "Start", "End"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RangeRecord {
    pub source: Source,
    pub service: String,
    pub region: String,
    pub region_norm: String,
    pub prefix: String,
    pub start: u32,
    pub end: u32,
}

impl From<&Range> for RangeRecord {
    fn from(range: &Range) -> Self {
        let bounds = range.bounds();
        Self {
            source: range.source,
            service: range.service.clone(),
            region: range.region.clone(),
            region_norm: range.region_normalized(),
            prefix: range.prefix().to_string(),
            start: bounds.start(),
            end: bounds.end(),
        }
    }
}

/// A lookup hit: `{"InputIP", "Range": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRecord {
    #[serde(rename = "InputIP")]
    pub input_ip: String,
    #[serde(rename = "Range")]
    pub range: RangeRecord,
}

impl From<&RangeEntry<'_>> for QueryRecord {
    fn from(entry: &RangeEntry<'_>) -> Self {
        Self {
            input_ip: entry.input_ip.clone(),
            range: RangeRecord::from(entry.range),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
