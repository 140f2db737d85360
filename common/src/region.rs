//! # Region Normalization
//!
//! Providers name their regions in incompatible ways (`westeurope`,
//! `europe-west1`, `eu-frankfurt-1`, `eu-west-1`). [`normalize`] folds them
//! into one small geographic taxonomy of `<continent>-<direction>` tags so
//! ranges from different clouds can be compared.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::trace;

/// Known provider region codes and the canonical tag each maps to.
///
/// Amazon codes are absent on purpose; they already follow the
/// `<continent>-<direction>-<n>` shape and are handled by the suffix fallback.
static REGION_TABLE: &[(&str, &str)] = &[
    // Azure
    ("westeurope", "eu-west"),
    ("eastus", "us-east"),
    ("northeurope", "eu-north"),
    ("centralus", "us-central"),
    ("southcentralus", "us-southcentral"),
    ("westus", "us-west"),
    ("southeastasia", "ap-southeast"),
    ("eastasia", "ap-east"),
    ("northcentralus", "us-northcentral"),
    ("uksouth", "eu-west"),
    ("australiaeast", "ap-southeast"),
    ("canadacentral", "ca-central"),
    ("japaneast", "ap-northeast"),
    ("eastus2euap", "us-east"),
    ("centralindia", "ap-south"),
    ("australiasoutheast", "ap-southeast"),
    ("brazilsouth", "sa-east"),
    ("centralfrance", "eu-west"),
    ("westcentralus", "us-westcentral"),
    ("ukwest", "eu-west"),
    ("koreacentral", "ap-northeast"),
    ("japanwest", "ap-northeast"),
    ("southafricanorth", "af-south"),
    ("westus3", "us-west"),
    ("germanywc", "eu-central"),
    ("centraluseuap", "us-central"),
    ("canadaeast", "ca-east"),
    ("uaenorth", "me-south"),
    ("southindia", "ap-south"),
    ("switzerlandn", "eu-central"),
    ("norwaye", "eu-north"),
    ("swedencentral", "eu-north"),
    ("koreasouth", "ap-northeast"),
    ("westindia", "ap-south"),
    ("uaecentral", "me-south"),
    ("southfrance", "eu-west"),
    ("southafricawest", "af-southwest"),
    ("switzerlandw", "eu-central"),
    ("australiacentral", "ap-southeast"),
    ("germanyn", "eu-central"),
    ("usstagee", "us-east"),
    ("brazilse", "sa-southeast"),
    ("qatarcentral", "me-south"),
    ("swedensouth", "eu-north"),
    ("norwayw", "eu-north"),
    ("australiacentral2", "ap-southeast"),
    ("jioindiawest", "ap-south"),
    ("jioindiacentral", "ap-south"),
    ("israelcentral", "me-south"),
    ("polandcentral", "eu-east"),
    ("usstagec", "us-central"),
    ("uksouth2", "eu-west"),
    ("eastusslv", "us-east"),
    ("uknorth", "eu-west"),
    ("taiwannorth", "ap-northeast"),
    ("taiwannorthwest", "ap-northeast"),
    ("austriaeast", "ap-southeast"),
    ("spaincentral", "eu-south"),
    ("newzealandnorth", "ap-southeast"),
    ("mexicocentral", "sa-north"),
    ("italynorth", "eu-south"),
    ("northeurope2", "eu-north"),
    ("malaysiawest", "ap-west"),
    ("indiasouthcentral", "ap-south"),
    ("chilec", "sa-west"),
    ("belgiumcentral", "eu-central"),
    ("easteurope", "eu-east"),
    ("brazilne", "sa-northeast"),
    // Google
    ("us-central1", "us-central"),
    ("europe-west1", "eu-west"),
    ("us-east1", "us-east"),
    ("asia-east1", "ap-east"),
    ("us-east4", "us-east"),
    ("global", "global"),
    ("asia-southeast1", "ap-southeast"),
    ("us-west1", "us-west"),
    ("asia-northeast1", "ap-northeast"),
    ("europe-west2", "eu-west"),
    ("europe-west3", "eu-west"),
    ("australia-southeast1", "ap-southeast"),
    ("asia-northeast3", "ap-northeast"),
    ("southamerica-east1", "sa-east"),
    ("europe-west4", "eu-west"),
    ("us-west2", "us-west"),
    ("asia-south1", "ap-south"),
    ("asia-east2", "ap-east"),
    ("northamerica-northeast1", "ca-east"),
    ("us-central2", "us-central"),
    ("europe-north1", "eu-north"),
    ("europe-west6", "eu-west"),
    ("asia-southeast2", "ap-southeast"),
    ("asia-northeast2", "ap-northeast"),
    ("us-west3", "us-west"),
    ("us-west4", "us-west"),
    ("northamerica-northeast2", "ca-east"),
    ("europe-west9", "eu-west"),
    ("europe-central2", "eu-central"),
    ("australia-southeast2", "ap-southeast"),
    ("asia-south2", "ap-south"),
    ("us-east7", "us-east"),
    ("southamerica-west1", "sa-west"),
    ("europe-west8", "eu-west"),
    // Oracle
    ("us-ashburn-1", "us-east"),
    ("eu-frankfurt-1", "eu-central"),
    ("us-phoenix-1", "us-west"),
    ("uk-london-1", "eu-west"),
    ("sa-saopaulo-1", "sa-east"),
    ("eu-amsterdam-1", "eu-central"),
    ("ap-mumbai-1", "ap-south"),
    ("ap-seoul-1", "ap-northeast"),
    ("ap-tokyo-1", "ap-northeast"),
    ("us-sanjose-1", "us-west"),
    ("eu-zurich-1", "eu-central"),
    ("ap-sydney-1", "ap-southeast"),
    ("ap-hyderabad-1", "ap-south"),
    ("ap-chuncheon-1", "ap-northeast"),
    ("me-jeddah-1", "me-south"),
    ("ap-osaka-1", "ap-northeast"),
    ("ca-toronto-1", "ca-east"),
    ("uk-cardiff-1", "eu-west"),
    ("ap-singapore-1", "ap-northeast"),
    ("ap-melbourne-1", "ap-southeast"),
    ("sa-santiago-1", "sa-west"),
    ("ca-montreal-1", "ca-east"),
    ("me-dubai-1", "ap-south"),
    ("eu-marseille-1", "eu-west"),
    ("sa-vinhedo-1", "sa-east"),
    ("me-abudhabi-1", "me-south"),
    ("il-jerusalem-1", "me-south"),
    ("eu-stockholm-1", "eu-north"),
    ("eu-milan-1", "eu-south"),
    ("af-johannesburg-1", "af-south"),
];

static REGION_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn region_map() -> &'static HashMap<&'static str, &'static str> {
    REGION_MAP.get_or_init(|| REGION_TABLE.iter().copied().collect())
}

/// Maps a provider-native region code to its canonical geographic tag.
///
/// Codes in the table win. Anything else has every `-<digit>` pair removed,
/// which turns `us-east-1` into `us-east` and leaves codes without a numeric
/// suffix untouched.
pub fn normalize(region: &str) -> String {
    if let Some(tag) = region_map().get(region).filter(|tag| !tag.is_empty()) {
        return (*tag).to_string();
    }

    let stripped = strip_numeric_suffixes(region);
    if stripped != region {
        trace!(region, normalized = %stripped, "region not in table, stripped numeric suffix");
    }
    stripped
}

/// True when the code has an explicit table entry.
pub fn is_mapped(region: &str) -> bool {
    region_map().contains_key(region)
}

fn strip_numeric_suffixes(region: &str) -> String {
    let mut out = String::with_capacity(region.len());
    let mut chars = region.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' && chars.peek().is_some_and(|next| next.is_ascii_digit()) {
            chars.next();
            continue;
        }
        out.push(c);
    }

    out
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
