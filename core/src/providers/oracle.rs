//! Oracle Cloud's `public_ip_ranges.json`.
//!
//! `{"last_updated_timestamp", "regions": [{"region", "cidrs": [{"cidr", "tags": [...]}]}]}`
//!
//! The manifest has no per-service breakdown, so every range gets an empty
//! service. Tags (`OCI`, `OSN`, `OBJECT_STORAGE`) are not carried over.

use cloudrange_common::{Range, RangeError, Source};
use serde::Deserialize;
use tracing::{debug, trace};

use super::ManifestParser;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OracleManifest {
    #[serde(deserialize_with = "super::null_as_default")]
    pub last_updated_timestamp: String,
    #[serde(deserialize_with = "super::null_list_as_default")]
    pub regions: Vec<OracleRegion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OracleRegion {
    #[serde(deserialize_with = "super::null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "super::null_list_as_default")]
    pub cidrs: Vec<OracleCidr>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OracleCidr {
    #[serde(deserialize_with = "super::null_as_default")]
    pub cidr: String,
    #[serde(deserialize_with = "super::null_list_as_default")]
    pub tags: Vec<String>,
}

pub struct Oracle;

impl ManifestParser for Oracle {
    const SOURCE: Source = Source::Oracle;
    type Manifest = OracleManifest;

    fn log_metadata(manifest: &OracleManifest) {
        debug!(
            last_updated = %manifest.last_updated_timestamp,
            regions = manifest.regions.len(),
            "oracle manifest"
        );
    }

    fn into_ranges(manifest: OracleManifest) -> Result<Vec<Range>, RangeError> {
        let mut ranges = Vec::new();

        for region in manifest.regions {
            trace!(region = %region.region, cidrs = region.cidrs.len(), "oracle region");
            for cidr in &region.cidrs {
                ranges.push(Range::from_cidr(
                    Self::SOURCE,
                    "",
                    region.region.as_str(),
                    &cidr.cidr,
                )?);
            }
        }

        Ok(ranges)
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
