//! Azure's `ServiceTags_Public_*.json`.
//!
//! `{"cloud", "values": [{"name", "id", "properties": {"region", "platform", "systemService", "addressPrefixes": [...]}}]}`
//!
//! Service tags without a region (`AzureCloud`, `AzureFrontDoor.Frontend`, ...)
//! describe global address space and are skipped together with all of their
//! prefixes. A regional tag fans out into one range per listed prefix.

use cloudrange_common::{Range, RangeError, Source};
use serde::Deserialize;
use tracing::{debug, trace};

use super::ManifestParser;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AzureManifest {
    #[serde(deserialize_with = "super::null_as_default")]
    pub cloud: String,
    #[serde(alias = "Values", deserialize_with = "super::null_list_as_default")]
    pub values: Vec<ServiceTag>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceTag {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub properties: ServiceTagProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceTagProperties {
    #[serde(deserialize_with = "super::null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub system_service: String,
    #[serde(alias = "AddressPrefixes", deserialize_with = "super::null_list_as_default")]
    pub address_prefixes: Vec<String>,
}

pub struct Azure;

impl ManifestParser for Azure {
    const SOURCE: Source = Source::Azure;
    type Manifest = AzureManifest;

    fn log_metadata(manifest: &AzureManifest) {
        debug!(cloud = %manifest.cloud, service_tags = manifest.values.len(), "azure manifest");
    }

    fn into_ranges(manifest: AzureManifest) -> Result<Vec<Range>, RangeError> {
        let mut ranges = Vec::new();

        for tag in manifest.values {
            let props = tag.properties;
            if props.region.is_empty() {
                trace!(name = %tag.name, prefixes = props.address_prefixes.len(), "skipping service tag without region");
                continue;
            }

            for cidr in &props.address_prefixes {
                ranges.push(Range::from_cidr(
                    Self::SOURCE,
                    props.system_service.as_str(),
                    props.region.as_str(),
                    cidr,
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

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "changeNumber": 300,
        "cloud": "Public",
        "values": [
            {
                "name": "AzureCloud",
                "id": "AzureCloud",
                "properties": {
                    "changeNumber": 100,
                    "region": "",
                    "regionId": 0,
                    "platform": "Azure",
                    "systemService": "",
                    "addressPrefixes": ["4.144.0.0/12", "13.64.0.0/11", "20.0.0.0/11"]
                }
            },
            {
                "name": "AzureCloud.westeurope",
                "id": "AzureCloud.westeurope",
                "properties": {
                    "changeNumber": 50,
                    "region": "westeurope",
                    "regionId": 18,
                    "platform": "Azure",
                    "systemService": "",
                    "addressPrefixes": ["13.69.0.0/17", "20.50.0.0/18"]
                }
            },
            {
                "name": "Storage.EastUS",
                "id": "Storage.EastUS",
                "properties": {
                    "region": "eastus",
                    "platform": "Azure",
                    "systemService": "AzureStorage",
                    "addressPrefixes": ["20.38.98.0/24"]
                }
            }
        ]
    }"#;

    #[test]
    fn regional_tags_fan_out_and_global_tags_are_dropped() {
        let ranges = Azure::parse(MANIFEST.as_bytes()).unwrap();
        assert_eq!(ranges.len(), 3);

        assert!(ranges.iter().all(|r| r.source == Source::Azure));
        assert!(ranges.iter().all(|r| !r.region.is_empty()));

        assert_eq!(ranges[0].region, "westeurope");
        assert_eq!(ranges[0].prefix().to_string(), "13.69.0.0/17");
        assert_eq!(ranges[1].prefix().to_string(), "20.50.0.0/18");
        assert_eq!(ranges[1].region_normalized(), "eu-west");

        assert_eq!(ranges[2].service, "AzureStorage");
        assert_eq!(ranges[2].region_normalized(), "us-east");
    }

    #[test]
    fn empty_region_skips_even_invalid_prefixes() {
        let json = r#"{"values": [{"name": "AzureCloud", "properties": {"region": "", "addressPrefixes": ["junk", "2603:1000::/40"]}}]}"#;
        assert!(Azure::parse(json.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn ipv6_prefix_in_regional_tag_is_fatal() {
        let json = r#"{"values": [{"name": "AzureCloud.eastus", "properties": {"region": "eastus", "addressPrefixes": ["20.42.0.0/17", "2603:1030:210::/47"]}}]}"#;
        assert!(matches!(
            Azure::parse(json.as_bytes()),
            Err(RangeError::MalformedManifest { provider: Source::Azure, .. })
        ));
    }

    #[test]
    fn null_region_is_skipped_like_an_empty_one() {
        let json = r#"{"values": [
            {"name": "AzureCloud", "properties": {"region": null, "addressPrefixes": ["4.144.0.0/12"]}},
            {"name": "AzureCloud.eastus", "properties": {"region": "eastus", "systemService": null, "addressPrefixes": ["20.42.0.0/17"]}}
        ]}"#;

        let ranges = Azure::parse(json.as_bytes()).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].region, "eastus");
        assert_eq!(ranges[0].service, "");
    }

    #[test]
    fn null_prefix_list_or_properties_yield_nothing() {
        let json = r#"{"cloud": null, "values": [
            {"name": "AzureCloud.westeurope", "properties": {"region": "westeurope", "addressPrefixes": null}},
            {"name": "AzureCloud.eastus", "properties": null},
            null
        ]}"#;
        assert!(Azure::parse(json.as_bytes()).unwrap().is_empty());
    }
}
