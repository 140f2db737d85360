//! Amazon's `ip-ranges.json`.
//!
//! `{"syncToken", "createDate", "prefixes": [{"ip_prefix", "region", "service", "network_border_group"}]}`
//!
//! Every listed prefix becomes a range; nothing is filtered. IPv6 blocks live
//! in a separate `ipv6_prefixes` array that is not read.

use cloudrange_common::{Range, RangeError, Source};
use serde::Deserialize;
use tracing::debug;

use super::ManifestParser;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmazonManifest {
    #[serde(deserialize_with = "super::null_as_default")]
    pub sync_token: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub create_date: String,
    #[serde(deserialize_with = "super::null_list_as_default")]
    pub prefixes: Vec<AmazonPrefix>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AmazonPrefix {
    #[serde(deserialize_with = "super::null_as_default")]
    pub ip_prefix: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub service: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub network_border_group: String,
}

pub struct Amazon;

impl ManifestParser for Amazon {
    const SOURCE: Source = Source::Amazon;
    type Manifest = AmazonManifest;

    fn log_metadata(manifest: &AmazonManifest) {
        debug!(
            sync_token = %manifest.sync_token,
            create_date = %manifest.create_date,
            prefixes = manifest.prefixes.len(),
            "amazon manifest"
        );
    }

    fn into_ranges(manifest: AmazonManifest) -> Result<Vec<Range>, RangeError> {
        manifest
            .prefixes
            .into_iter()
            .map(|p| Range::from_cidr(Self::SOURCE, p.service, p.region, &p.ip_prefix))
            .collect()
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
