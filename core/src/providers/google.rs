//! Google Cloud's `cloud.json`.
//!
//! `{"syncToken", "creationTime", "prefixes": [{"ipv4Prefix" | "ipv6Prefix", "service", "scope"}]}`
//!
//! Each entry carries either an IPv4 or an IPv6 prefix. Entries without an
//! `ipv4Prefix` are skipped rather than parsed.

use cloudrange_common::{Range, RangeError, Source};
use serde::Deserialize;
use tracing::{debug, trace};

use super::ManifestParser;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoogleManifest {
    #[serde(deserialize_with = "super::null_as_default")]
    pub sync_token: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub creation_time: String,
    #[serde(deserialize_with = "super::null_list_as_default")]
    pub prefixes: Vec<GooglePrefix>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GooglePrefix {
    #[serde(deserialize_with = "super::null_as_default")]
    pub ipv4_prefix: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub ipv6_prefix: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub service: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub scope: String,
}

pub struct Google;

impl ManifestParser for Google {
    const SOURCE: Source = Source::Google;
    type Manifest = GoogleManifest;

    fn log_metadata(manifest: &GoogleManifest) {
        debug!(
            sync_token = %manifest.sync_token,
            creation_time = %manifest.creation_time,
            prefixes = manifest.prefixes.len(),
            "google manifest"
        );
    }

    fn into_ranges(manifest: GoogleManifest) -> Result<Vec<Range>, RangeError> {
        let mut ranges = Vec::with_capacity(manifest.prefixes.len());

        for prefix in manifest.prefixes {
            if prefix.ipv4_prefix.is_empty() {
                trace!(ipv6_prefix = %prefix.ipv6_prefix, scope = %prefix.scope, "skipping entry without ipv4Prefix");
                continue;
            }

            ranges.push(Range::from_cidr(
                Self::SOURCE,
                prefix.service,
                prefix.scope,
                &prefix.ipv4_prefix,
            )?);
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
